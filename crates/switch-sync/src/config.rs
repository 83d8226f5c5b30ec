//! Sync Configuration
//!
//! Page-supplied settings for the switch panel. Every field has a default,
//! so an empty object (or no config at all) gives the stock `/api` setup.

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};
use crate::models::ToggleState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// POST target
    pub endpoint: String,
    /// Form field carrying the label text
    pub field: String,
    pub checkbox_id: String,
    pub label_id: String,
    /// Initial checkbox state when the panel renders its own markup
    pub initially_checked: bool,
    /// Initial label text when the panel renders its own markup
    pub initial_label: String,
    /// Ask for `Connection: close`
    pub close_connection: bool,
    /// Abort the request after this many milliseconds (None = wait forever)
    pub timeout_ms: Option<u32>,
    /// Label written when a request is aborted by the timeout
    pub timeout_label: String,
    /// Console log level name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api".to_string(),
            field: "switch".to_string(),
            checkbox_id: "termsCheckbox".to_string(),
            label_id: "terms_div".to_string(),
            initially_checked: false,
            initial_label: ToggleState::Off.label().to_string(),
            close_connection: true,
            timeout_ms: None,
            timeout_label: "Network Error".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SyncConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> SyncResult<Self> {
        let config: SyncConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SyncResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(SyncError::Config("endpoint must not be empty".into()));
        }
        if self.field.trim().is_empty() {
            return Err(SyncError::Config("field must not be empty".into()));
        }
        if self.timeout_ms == Some(0) {
            return Err(SyncError::Config("timeout_ms must be positive".into()));
        }
        Ok(())
    }

    /// Decide how to bind given which configured elements the page has.
    ///
    /// Both present: attach (`true`). Neither: render our own (`false`).
    /// Only one: the page is half-built, and rendering would duplicate an id.
    pub fn attach_mode(&self, has_checkbox: bool, has_label: bool) -> SyncResult<bool> {
        match (has_checkbox, has_label) {
            (true, true) => Ok(true),
            (false, false) => Ok(false),
            (true, false) => Err(SyncError::Config(format!(
                "found #{} but no #{}",
                self.checkbox_id, self.label_id
            ))),
            (false, true) => Err(SyncError::Config(format!(
                "found #{} but no #{}",
                self.label_id, self.checkbox_id
            ))),
        }
    }
}
