use gloo_net::http::Request;
use log::{debug, info};
use serde::de::DeserializeOwned;
use video_manual_core::youtube::{
    collect_results, http_error, validate_keyword, video_ids, SearchListResponse,
    VideoListResponse, YoutubeApi,
};
use video_manual_core::{Error, Result, VideoSummary};

/// Runs the keyword search followed by the statistics lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchClient {
    api: YoutubeApi,
}

impl SearchClient {
    pub fn new(api: YoutubeApi) -> Self {
        Self { api }
    }

    /// Ranked results for `keyword`. Any failure aborts the whole search.
    pub async fn search(&self, keyword: &str) -> Result<Vec<VideoSummary>> {
        let keyword = validate_keyword(keyword)?;
        info!(
            "Searching up to {} videos for \"{keyword}\" ({})",
            self.api.max_results(),
            self.api.relevance_language()
        );

        let search: SearchListResponse = get_json(&self.api.search_url(keyword)).await?;
        let ids = video_ids(&search);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Fetching statistics for {} videos", ids.len());
        let videos: VideoListResponse = get_json(&self.api.videos_url(&ids)).await?;

        Ok(collect_results(search, videos))
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(http_error(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}
