// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::with_capacity(num_str.len() + num_str.len() / 3);
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(50000), "50,000");
        assert_eq!(format_number(1000), "1,000");
    }

    #[test]
    fn leaves_small_numbers_alone() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn handles_u64_max() {
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }
}
