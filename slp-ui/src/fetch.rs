//! Browser `fetch` wrapper for panel requests.
//!
//! Issues `POST <url>` with `Content-Type: application/json` and body
//! `{"idea": ...}` through `window.fetch`, then reads the body as text and
//! parses it with `serde_json` so the document is stored verbatim.

use js_sys::Error as JsError;
use log::{info, warn};
use serde_json::Value;
use slp_core::endpoint::AnalysisRequest;
use slp_core::error::parse_body;
use slp_core::FetchError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Best-effort human readable text for a thrown JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<JsError>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn build_request(url: &str, idea: &str) -> Result<Request, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&AnalysisRequest::new(idea).to_json()));

    Request::new_with_str_and_init(url, &init)
}

/// POST the idea to `url` and return the parsed JSON body.
pub async fn post_idea(url: &str, idea: &str) -> Result<Value, FetchError> {
    info!("Requesting analysis from {}", url);

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
    let request = build_request(url, idea).map_err(|e| FetchError::Network(js_message(&e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            warn!("Request to {} failed: {}", url, js_message(&e));
            FetchError::Network(js_message(&e))
        })?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Network(js_message(&e)))?;

    if !response.ok() {
        warn!("Bad response status from {}: {}", url, response.status());
        return Err(FetchError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| FetchError::Malformed(js_message(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Malformed(js_message(&e)))?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Malformed("response body is not text".to_string()))?;

    parse_body(&body)
}
