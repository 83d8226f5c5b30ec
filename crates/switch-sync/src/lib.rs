//! Switch Sync
//!
//! Browser-independent core of the switch panel: the toggle controller,
//! label states, the form codec and the request/reply types a transport
//! speaks. The front end supplies the label, the transport and the spawner.

mod config;
mod controller;
mod error;
mod form;
mod models;
mod transport;

#[cfg(test)]
mod tests;

pub use config::SyncConfig;
pub use controller::{LocalTask, Spawner, StatusLabel, SwitchController};
pub use error::{SyncError, SyncResult};
pub use form::{encode_component, encode_field, FORM_CONTENT_TYPE};
pub use models::{LabelState, SyncReply, ToggleState};
pub use transport::{SyncRequest, SyncTransport};
