use crate::format::format_number;
use serde::{Deserialize, Serialize};

pub const WATCH_BASE_URL: &str = "https://www.youtube.com";

/// One ranked search hit, ready for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub view_count: u64,
    /// Already converted to `H:MM:SS` / `MM:SS`.
    pub duration: String,
    pub thumbnail: String,
}

impl VideoSummary {
    pub fn watch_url(&self) -> String {
        format!(
            "{WATCH_BASE_URL}/watch?v={}",
            urlencoding::encode(&self.id)
        )
    }

    pub fn formatted_view_count(&self) -> String {
        format_number(self.view_count)
    }
}
