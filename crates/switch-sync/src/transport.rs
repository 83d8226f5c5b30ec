//! Sync Transport
//!
//! The seam between the controller and whatever actually speaks HTTP.

use async_trait::async_trait;

use crate::config::SyncConfig;
use crate::error::SyncResult;
use crate::form::{encode_field, FORM_CONTENT_TYPE};
use crate::models::SyncReply;

/// One outgoing sync request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub endpoint: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl SyncRequest {
    /// Form POST carrying the label text in the configured field
    pub fn form(config: &SyncConfig, label_text: &str) -> Self {
        let mut headers = vec![("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string())];
        if config.close_connection {
            headers.push(("Connection".to_string(), "close".to_string()));
        }
        Self {
            endpoint: config.endpoint.clone(),
            body: encode_field(&config.field, label_text),
            headers,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends a sync request and resolves once a response has been received.
///
/// Runs on the single-threaded page loop, so futures are not `Send`.
#[async_trait(?Send)]
pub trait SyncTransport {
    async fn post(&self, request: &SyncRequest) -> SyncResult<SyncReply>;
}
