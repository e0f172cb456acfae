//! Parser for the platform's `contentDetails.duration` field.
//!
//! Values are ISO-8601 durations restricted to whole numbers: `PT1H2M3S`,
//! `PT45S`, `P1DT2H` for day-long streams and `P0D` for live broadcasts.

use crate::error::{Error, Result};
use std::fmt;

pub const UNKNOWN_DURATION: &str = "--:--";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoDuration {
    /// Days are folded in here.
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// An `H` component was written, even `0H`, or a non-zero day count.
    pub has_hours: bool,
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_hours {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{:02}:{:02}", self.minutes, self.seconds)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Designator {
    Days,
    Hours,
    Minutes,
    Seconds,
}

pub fn parse_duration(raw: &str) -> Result<VideoDuration> {
    let invalid = || Error::InvalidDuration(raw.to_string());

    let body = raw.strip_prefix('P').ok_or_else(invalid)?;
    let mut parsed = VideoDuration::default();
    let mut in_time_part = false;
    let mut last: Option<Designator> = None;
    let mut current_number = String::new();

    for ch in body.chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
            continue;
        }

        let designator = match (ch, in_time_part) {
            ('T', false) if current_number.is_empty() => {
                in_time_part = true;
                continue;
            }
            ('D', false) => Designator::Days,
            ('H', true) => Designator::Hours,
            ('M', true) => Designator::Minutes,
            ('S', true) => Designator::Seconds,
            _ => return Err(invalid()),
        };

        // Each component at most once and in D, H, M, S order.
        if last.is_some_and(|prev| prev >= designator) {
            return Err(invalid());
        }
        last = Some(designator);

        let value: u64 = current_number.parse().map_err(|_| invalid())?;
        current_number.clear();

        match designator {
            Designator::Days => {
                parsed.hours = value.checked_mul(24).ok_or_else(invalid)?;
                parsed.has_hours = value > 0;
            }
            Designator::Hours => {
                parsed.hours = parsed.hours.checked_add(value).ok_or_else(invalid)?;
                parsed.has_hours = true;
            }
            Designator::Minutes => parsed.minutes = value,
            Designator::Seconds => parsed.seconds = value,
        }
    }

    let time_part_empty = in_time_part && last.map_or(true, |d| d == Designator::Days);
    if !current_number.is_empty() || last.is_none() || time_part_empty {
        return Err(invalid());
    }

    Ok(parsed)
}

/// `PT1H2M3S` -> `1:02:03`, `PT5M9S` -> `05:09`.
pub fn format_duration(raw: &str) -> Result<String> {
    parse_duration(raw).map(|d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_duration("PT1H2M3S").unwrap(), "1:02:03");
    }

    #[test]
    fn formats_without_hours() {
        assert_eq!(format_duration("PT5M9S").unwrap(), "05:09");
        assert_eq!(format_duration("PT45S").unwrap(), "00:45");
        assert_eq!(format_duration("PT12M").unwrap(), "12:00");
    }

    #[test]
    fn formats_hours_only() {
        assert_eq!(format_duration("PT2H").unwrap(), "2:00:00");
        assert_eq!(format_duration("PT10H5S").unwrap(), "10:00:05");
    }

    #[test]
    fn folds_days_into_hours() {
        assert_eq!(format_duration("P1DT2H3M4S").unwrap(), "26:03:04");
        assert_eq!(format_duration("P2D").unwrap(), "48:00:00");
    }

    #[test]
    fn live_broadcast_is_zero() {
        assert_eq!(format_duration("P0D").unwrap(), "00:00");
    }

    #[test]
    fn explicit_zero_hour_keeps_hour_field() {
        assert_eq!(format_duration("PT0H5M9S").unwrap(), "0:05:09");
        assert_eq!(format_duration("PT0H").unwrap(), "0:00:00");
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in [
            "", "P", "PT", "1H2M", "PT1X", "PTH", "PT1.5S", "PT3S2M", "PT1M1M", "PT5", "P1DT",
            "P1H",
        ] {
            assert_eq!(
                parse_duration(raw),
                Err(Error::InvalidDuration(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_overflowing_day_count() {
        assert!(parse_duration("P999999999999999999D").is_err());
    }
}
