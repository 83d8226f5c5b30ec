//! Switch Panel Frontend Entry Point

mod api;
mod app;
mod config;
mod dom;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = config::load_page_config();
    logging::set_level(&config.log_level);

    match dom::attach_to_page(&config) {
        Ok(true) => log::info!("[APP] attached to #{} and #{}", config.checkbox_id, config.label_id),
        Ok(false) => {
            log::info!("[APP] no switch markup found, mounting panel");
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(err) => log::error!("[APP] cannot attach: {}", err),
    }
}
