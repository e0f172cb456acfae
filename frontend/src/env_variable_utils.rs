use web_sys::window;

pub const DEFAULT_APP_NAME: &str = "動画マニュアル作成ツール";

/// Reads `window.ENV_CONFIG[key]`, which `env-config.js` sets before the
/// WASM bundle loads.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_api_key() -> String {
    get_env_var("YOUTUBE_API_KEY").unwrap_or_default()
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn get_relevance_language() -> Option<String> {
    get_env_var("RELEVANCE_LANGUAGE").filter(|lang| !lang.trim().is_empty())
}

pub fn get_max_results() -> Option<u32> {
    get_env_var("MAX_RESULTS").and_then(|raw| match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            log::warn!("Ignoring MAX_RESULTS '{}': {}", raw, e);
            None
        }
    })
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
