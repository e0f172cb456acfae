//! Contract with the YouTube Data API v3.
//!
//! Documentation: https://developers.google.com/youtube/v3/docs/search/list
//! and https://developers.google.com/youtube/v3/docs/videos/list
//!
//! This module only builds request URLs and interprets responses; the
//! transport lives with the caller so the same logic runs in the browser
//! and in native tests.

use crate::duration::{format_duration, UNKNOWN_DURATION};
use crate::error::{Error, Result};
use crate::model::VideoSummary;
use crate::ranking::rank_by_views;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_RELEVANCE_LANGUAGE: &str = "ja";
/// Upper bound the platform accepts for `maxResults` and for `id` lists.
pub const MAX_RESULTS_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeApi {
    api_key: String,
    base_url: String,
    max_results: u32,
    relevance_language: String,
}

impl YoutubeApi {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: MAX_RESULTS_LIMIT,
            relevance_language: DEFAULT_RELEVANCE_LANGUAGE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Clamped to `1..=50`.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULTS_LIMIT);
        self
    }

    pub fn with_relevance_language(mut self, language: impl Into<String>) -> Self {
        self.relevance_language = language.into();
        self
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn relevance_language(&self) -> &str {
        &self.relevance_language
    }

    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}/search?part=snippet&type=video&q={}&maxResults={}&relevanceLanguage={}&key={}",
            self.base_url,
            urlencoding::encode(keyword),
            self.max_results,
            urlencoding::encode(&self.relevance_language),
            urlencoding::encode(&self.api_key),
        )
    }

    pub fn videos_url(&self, video_ids: &[String]) -> String {
        let ids = video_ids
            .iter()
            .map(|id| urlencoding::encode(id).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/videos?part=statistics,contentDetails&id={}&key={}",
            self.base_url,
            ids,
            urlencoding::encode(&self.api_key),
        )
    }
}

pub fn validate_keyword(keyword: &str) -> Result<&str> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        Err(Error::EmptyKeyword)
    } else {
        Ok(keyword)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    pub fn preview_url(&self) -> Option<&str> {
        self.medium
            .as_ref()
            .or(self.high.as_ref())
            .or(self.default.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    pub id: String,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Absent when the uploader hides the count.
    pub view_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Builds an [`Error::Http`] from a non-2xx response, preferring the
/// platform's own error message over the raw body.
pub fn http_error(status: u16, body: &str) -> Error {
    let message = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(response) => response.error.message,
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    Error::Http { status, message }
}

/// Identifiers for the statistics request, in search order.
pub fn video_ids(search: &SearchListResponse) -> Vec<String> {
    search
        .items
        .iter()
        .filter_map(|item| item.id.video_id.clone())
        .collect()
}

/// Joins search hits with their statistics by video id.
///
/// Output follows search order. A hit without a statistics entry (deleted or
/// made private between the two requests) is dropped, as is a repeated id.
pub fn merge_by_id(search: SearchListResponse, videos: VideoListResponse) -> Vec<VideoSummary> {
    let mut details: HashMap<String, VideoResource> = videos
        .items
        .into_iter()
        .map(|video| (video.id.clone(), video))
        .collect();

    let mut merged = Vec::with_capacity(search.items.len());
    for item in search.items {
        let Some(id) = item.id.video_id else {
            warn!("Skipping search result without a video id");
            continue;
        };
        let Some(resource) = details.remove(&id) else {
            warn!("No statistics returned for video {id}, skipping");
            continue;
        };

        merged.push(VideoSummary {
            title: html_escape::decode_html_entities(&item.snippet.title).into_owned(),
            thumbnail: item
                .snippet
                .thumbnails
                .preview_url()
                .unwrap_or_default()
                .to_string(),
            view_count: parse_view_count(&id, resource.statistics.view_count.as_deref()),
            duration: display_duration(&id, resource.content_details.duration.as_deref()),
            id,
        });
    }

    if !details.is_empty() {
        debug!("{} statistics entries had no matching search result", details.len());
    }

    merged
}

/// Merge, then rank most viewed first.
pub fn collect_results(search: SearchListResponse, videos: VideoListResponse) -> Vec<VideoSummary> {
    let mut results = merge_by_id(search, videos);
    rank_by_views(&mut results);
    results
}

fn parse_view_count(video_id: &str, raw: Option<&str>) -> u64 {
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Unreadable view count {raw:?} for video {video_id}: {e}");
            0
        }),
        None => 0,
    }
}

fn display_duration(video_id: &str, raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        warn!("No duration reported for video {video_id}");
        return UNKNOWN_DURATION.to_string();
    };
    format_duration(raw).unwrap_or_else(|e| {
        warn!("Video {video_id}: {e}");
        UNKNOWN_DURATION.to_string()
    })
}
