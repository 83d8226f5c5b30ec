//! Page Binding
//!
//! Binds the controller to checkbox and label markup the host page already
//! has. Elements are resolved once here and handed to the controller.

use std::rc::Rc;

use switch_sync::{LocalTask, Spawner, StatusLabel, SwitchController, SyncConfig, SyncError, SyncResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::api::{js_error_message, FetchTransport};

/// Status label backed by an existing element; written as text, never HTML
#[derive(Clone)]
pub struct ElementLabel {
    element: Element,
}

impl StatusLabel for ElementLabel {
    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Spawns onto the browser microtask queue
pub fn page_spawner() -> Spawner {
    Rc::new(|task: LocalTask| wasm_bindgen_futures::spawn_local(task))
}

/// Attach to `#checkbox_id` / `#label_id` if both exist.
///
/// Returns `Ok(false)` when the page has neither, and a config error when
/// it has only one of them.
pub fn attach_to_page(config: &SyncConfig) -> SyncResult<bool> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SyncError::Config("no document".into()))?;

    let checkbox = document.get_element_by_id(&config.checkbox_id);
    let label = document.get_element_by_id(&config.label_id);
    if !config.attach_mode(checkbox.is_some(), label.is_some())? {
        return Ok(false);
    }
    let (Some(checkbox), Some(label)) = (checkbox, label) else {
        return Ok(false);
    };

    let checkbox: HtmlInputElement = checkbox
        .dyn_into()
        .map_err(|_| SyncError::Config(format!("#{} is not an input element", config.checkbox_id)))?;

    let controller = SwitchController::new(
        ElementLabel { element: label },
        Rc::new(FetchTransport::new(config.timeout_ms)),
        config.clone(),
        page_spawner(),
    );

    let input = checkbox.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        controller.on_toggle(input.checked());
    });
    checkbox
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|e| SyncError::Config(js_error_message(&e)))?;
    // Listener lives as long as the page
    on_change.forget();

    Ok(true)
}
