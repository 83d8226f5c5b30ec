//! Page Configuration
//!
//! Reads `SyncConfig` from the host page: a `window.__SWITCH_CONFIG__`
//! object first, then a JSON `<script id="switch-config">` element.

use switch_sync::{SyncConfig, SyncError, SyncResult};
use wasm_bindgen::prelude::*;

const GLOBAL_CONFIG_KEY: &str = "__SWITCH_CONFIG__";
const CONFIG_ELEMENT_ID: &str = "switch-config";

/// Page config, falling back to defaults when absent or invalid
pub fn load_page_config() -> SyncConfig {
    match read_page_config() {
        Ok(Some(config)) => config,
        Ok(None) => SyncConfig::default(),
        Err(err) => {
            log::warn!("[CONFIG] {}, using defaults", err);
            SyncConfig::default()
        }
    }
}

fn read_page_config() -> SyncResult<Option<SyncConfig>> {
    let window = web_sys::window().ok_or_else(|| SyncError::Config("no window".into()))?;

    let global = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_CONFIG_KEY))
        .map_err(|e| SyncError::Config(crate::api::js_error_message(&e)))?;
    if !global.is_undefined() && !global.is_null() {
        let config: SyncConfig = serde_wasm_bindgen::from_value(global)
            .map_err(|e| SyncError::Config(format!("window.{}: {}", GLOBAL_CONFIG_KEY, e)))?;
        config.validate()?;
        return Ok(Some(config));
    }

    let Some(document) = window.document() else {
        return Ok(None);
    };
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => {
            let json = element.text_content().unwrap_or_default();
            SyncConfig::from_json(&json).map(Some)
        }
        None => Ok(None),
    }
}
