//! Fetch Transport
//!
//! Sends sync requests with the browser's `fetch`. An optional timeout
//! aborts the request through an `AbortController`.

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use switch_sync::{SyncError, SyncReply, SyncRequest, SyncResult, SyncTransport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

pub struct FetchTransport {
    timeout_ms: Option<u32>,
}

impl FetchTransport {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl SyncTransport for FetchTransport {
    async fn post(&self, request: &SyncRequest) -> SyncResult<SyncReply> {
        let window = web_sys::window().ok_or_else(|| SyncError::Network("no window".into()))?;

        // Browsers drop forbidden headers such as Connection
        let headers = Headers::new().map_err(network_error)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(network_error)?;
        }

        let abort = AbortController::new().map_err(network_error)?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&request.body));
        init.set_signal(Some(&abort.signal()));

        let fetch_request = Request::new_with_str_and_init(&request.endpoint, &init).map_err(network_error)?;

        // Cancelled on drop, so the deadline covers the body read too
        let _deadline = self.timeout_ms.map(|ms| {
            let abort = abort.clone();
            Timeout::new(ms, move || abort.abort())
        });

        // A rejection after abort() is reported as TimedOut; only a browser reaches this
        let settled = |e: JsValue| {
            if abort.signal().aborted() {
                SyncError::TimedOut
            } else {
                network_error(e)
            }
        };

        let response: Response = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(settled)?
            .dyn_into()
            .map_err(network_error)?;

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(settled)?
            .as_string()
            .unwrap_or_default();

        Ok(SyncReply::new(response.status(), response.status_text(), body))
    }
}

fn network_error(err: JsValue) -> SyncError {
    SyncError::Network(js_error_message(&err))
}

/// Best-effort text for a thrown JS value
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
