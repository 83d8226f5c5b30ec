//! Switch Panel App
//!
//! Renders the checkbox and status label when the host page has none.

use std::rc::Rc;

use leptos::prelude::*;
use switch_sync::{StatusLabel, SwitchController, SyncConfig};

use crate::api::FetchTransport;
use crate::dom::page_spawner;

/// Status label held in a signal; rendered as a text node
#[derive(Clone, Copy)]
struct SignalLabel(RwSignal<String>);

impl StatusLabel for SignalLabel {
    fn text(&self) -> String {
        self.0.get_untracked()
    }

    fn set_text(&self, text: &str) {
        self.0.set(text.to_string());
    }
}

#[component]
pub fn App(config: SyncConfig) -> impl IntoView {
    let label = RwSignal::new(config.initial_label.clone());
    let checkbox_id = config.checkbox_id.clone();
    let label_id = config.label_id.clone();
    let initially_checked = config.initially_checked;

    let transport = Rc::new(FetchTransport::new(config.timeout_ms));
    let controller = StoredValue::new_local(SwitchController::new(
        SignalLabel(label),
        transport,
        config,
        page_spawner(),
    ));

    view! {
        <div class="switch-panel">
            // Input is hidden; the <i> is drawn as the power button
            <label>
                <input
                    type="checkbox"
                    id=checkbox_id
                    prop:checked=initially_checked
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        controller.with_value(|c| {
                            c.on_toggle(checked);
                        });
                    }
                />
                <i></i>
            </label>
            <div id=label_id class="status-label">{move || label.get()}</div>
        </div>
    }
}
