use crate::env_variable_utils::{
    get_api_key, get_app_name, get_max_results, get_relevance_language, is_debug_mode,
};
use crate::search::api::SearchClient;
use video_manual_core::youtube::YoutubeApi;
use video_manual_core::Error;

/// Everything the app needs from its hosting page, read once at startup and
/// handed down as properties.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub debug: bool,
    /// `Err` when no API key is configured; every search then fails with it.
    pub client: Result<SearchClient, Error>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let client = YoutubeApi::new(get_api_key()).map(|mut api| {
            if let Some(language) = get_relevance_language() {
                api = api.with_relevance_language(language);
            }
            if let Some(max_results) = get_max_results() {
                api = api.with_max_results(max_results);
            }
            SearchClient::new(api)
        });

        Self {
            app_name: get_app_name(),
            debug: is_debug_mode(),
            client,
        }
    }
}
