//! Sync Errors
//!
//! Failures a sync round trip or the start-up configuration can produce.

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors surfaced by transports and config loading
#[derive(Debug, Clone, PartialEq)]
pub enum SyncError {
    /// The request never produced a response (DNS, refused, CORS, ...)
    Network(String),
    /// The request was aborted after the configured timeout
    TimedOut,
    /// Page configuration could not be read or is invalid
    Config(String),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::Network(msg) => write!(f, "Network error: {}", msg),
            SyncError::TimedOut => write!(f, "Request timed out"),
            SyncError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Config(err.to_string())
    }
}
