//! Loads `AppConfig` from the host page

use shared::{AppConfig, ConfigError, CONFIG_ELEMENT_ID};

/// read the `#app-config` block
///
/// a missing block is not an error. a malformed one falls back to defaults
/// and hands the error back so it can be logged once the logger is up.
pub fn load() -> (AppConfig, Option<ConfigError>) {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .unwrap_or_default();

    match AppConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}
