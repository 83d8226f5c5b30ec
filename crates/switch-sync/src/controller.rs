//! Switch Controller
//!
//! Toggle-and-sync handler. A toggle writes "On"/"Off" to the status label
//! and spawns one POST carrying the label text; when the request settles the
//! label is overwritten with the reply. Requests are never cancelled, so with
//! several in flight the last one to complete wins.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::models::{LabelState, SyncReply, ToggleState};
use crate::transport::{SyncRequest, SyncTransport};

/// Text region used both for display and as the request payload
pub trait StatusLabel {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// A sync round trip waiting to run on the page's event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Hands a task to the page's event loop
pub type Spawner = Rc<dyn Fn(LocalTask)>;

pub struct SwitchController<L, T> {
    label: L,
    transport: Rc<T>,
    config: Rc<SyncConfig>,
    spawner: Spawner,
    next_seq: Rc<Cell<u64>>,
}

impl<L, T> SwitchController<L, T>
where
    L: StatusLabel + Clone + 'static,
    T: SyncTransport + 'static,
{
    pub fn new(label: L, transport: Rc<T>, config: SyncConfig, spawner: Spawner) -> Self {
        Self {
            label,
            transport,
            config: Rc::new(config),
            spawner,
            next_seq: Rc::new(Cell::new(1)),
        }
    }

    /// Handle a checkbox change: update the label, then sync it.
    ///
    /// Returns the checked state unchanged.
    pub fn on_toggle(&self, checked: bool) -> bool {
        let state = LabelState::from(ToggleState::from(checked));
        self.label.set_text(state.text());
        log::info!("[SWITCH] toggled {}", state.text());
        self.sync_state();
        checked
    }

    /// Send the current label text to the endpoint without waiting for it
    pub fn sync_state(&self) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);

        let request = SyncRequest::form(&self.config, &self.label.text());
        log::debug!("[SYNC #{}] POST {} {}", seq, request.endpoint, request.body);

        let label = self.label.clone();
        let transport = Rc::clone(&self.transport);
        let config = Rc::clone(&self.config);
        (self.spawner)(Box::pin(async move {
            let outcome = transport.post(&request).await;
            if let Some(text) = settled_label(seq, &outcome, &config) {
                label.set_text(&text);
            }
        }));
    }
}

/// Label text after a request settles, or None to leave the label alone
fn settled_label(seq: u64, outcome: &Result<SyncReply, SyncError>, config: &SyncConfig) -> Option<String> {
    match outcome {
        Ok(reply) => {
            let state = LabelState::from_reply(reply);
            log::debug!("[SYNC #{}] {} -> {:?}", seq, reply.status, state);
            Some(state.text().to_string())
        }
        Err(SyncError::TimedOut) => {
            log::warn!("[SYNC #{}] timed out", seq);
            Some(config.timeout_label.clone())
        }
        Err(err) => {
            log::warn!("[SYNC #{}] {}", seq, err);
            None
        }
    }
}
