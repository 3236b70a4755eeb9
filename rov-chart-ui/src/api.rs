//! Fetch wrappers for the backend endpoints, plus the client-side file
//! save used by the spreadsheet export.
//!
//! All calls run on the single-threaded WASM event loop inside a Dioxus
//! `spawn`. There is no retry, timeout, or in-flight de-duplication:
//! failures are terminal for the current operation and surfaced to the
//! caller as an [`ApiError`].

use rov_model::{CalculationRequest, CalculationResult, HistoryEntry};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Request, RequestInit, Response, Url};

/// MIME type of the exported spreadsheet.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Failures crossing the network boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The fetch itself failed or a response body could not be read.
    Network(String),
    /// Non-2xx status; `message` holds a structured server error when the
    /// body contained one.
    Status { code: u16, message: Option<String> },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status {
                message: Some(msg), ..
            } => write!(f, "{msg}"),
            ApiError::Status { code, message: None } => {
                write!(f, "Request failed with status {code}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

fn js_error(context: &str, err: JsValue) -> ApiError {
    let detail = err
        .as_string()
        .unwrap_or_else(|| format!("{err:?}"));
    ApiError::Network(format!("{context}: {detail}"))
}

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))
}

/// Issue a request and hand back the raw `Response`.
async fn fetch(request: Request) -> Result<Response, ApiError> {
    let promise = window()?.fetch_with_request(&request);
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    value
        .dyn_into::<Response>()
        .map_err(|e| js_error("unexpected fetch result", e))
}

fn post_json_request(url: &str, body: &str) -> Result<Request, ApiError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| js_error("bad request", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("bad header", e))?;
    Ok(request)
}

async fn response_text(response: &Response) -> Result<String, ApiError> {
    let promise = response
        .text()
        .map_err(|e| js_error("response body unavailable", e))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("response body read failed", e))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Turn a non-2xx response into a status error, extracting a structured
/// `{error}` message when the body parses as one. Parse failures fall back
/// silently to the generic status-coded message.
async fn status_error(response: &Response) -> ApiError {
    let code = response.status();
    let message = match response_text(response).await {
        Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from)),
        Err(_) => None,
    };
    ApiError::Status { code, message }
}

/// `POST /calculate`, normal variant: parse the valuation result.
pub async fn post_calculate(payload: &CalculationRequest) -> Result<CalculationResult, ApiError> {
    let body = serde_json::to_string(payload)
        .map_err(|e| ApiError::Network(format!("payload serialization failed: {e}")))?;
    log::info!("POST /calculate (n={})", payload.n);

    let response = fetch(post_json_request("/calculate", &body)?).await?;
    if !response.ok() {
        return Err(status_error(&response).await);
    }

    let text = response_text(&response).await?;
    serde_json::from_str(&text)
        .map_err(|e| ApiError::Network(format!("invalid calculation response: {e}")))
}

/// `POST /calculate` with `export: "excel"`: expect a binary spreadsheet.
pub async fn post_calculate_export(payload: &CalculationRequest) -> Result<Vec<u8>, ApiError> {
    let body = serde_json::to_string(payload)
        .map_err(|e| ApiError::Network(format!("payload serialization failed: {e}")))?;
    log::info!("POST /calculate export (n={})", payload.n);

    let response = fetch(post_json_request("/calculate", &body)?).await?;
    if !response.ok() {
        return Err(status_error(&response).await);
    }

    let promise = response
        .array_buffer()
        .map_err(|e| js_error("binary body unavailable", e))?;
    let buffer = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("binary body read failed", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// `GET /api/user/history`: past calculations for the logged-in user.
pub async fn fetch_history() -> Result<Vec<HistoryEntry>, ApiError> {
    let request = Request::new_with_str("/api/user/history")
        .map_err(|e| js_error("bad request", e))?;
    let response = fetch(request).await?;
    if !response.ok() {
        return Err(status_error(&response).await);
    }

    let text = response_text(&response).await?;
    serde_json::from_str(&text)
        .map_err(|e| ApiError::Network(format!("invalid history response: {e}")))
}

/// Trigger a client-side download of `bytes` as `filename` via a temporary
/// object-URL anchor.
pub fn save_file(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ApiError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|e| js_error("blob creation failed", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_error("object URL creation failed", e))?;

    let document = window()?
        .document()
        .ok_or_else(|| ApiError::Network("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("anchor creation failed", e))?
        .dyn_into()
        .map_err(|e| js_error("anchor cast failed", e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();

    let body = document
        .body()
        .ok_or_else(|| ApiError::Network("no body".to_string()))?;
    body.append_child(&anchor).ok();
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).ok();
    Ok(())
}

/// Read a `data-*` attribute from the app mount element. The surrounding
/// page exposes the logged-in user's identity this way.
pub fn mount_attribute(root_id: &str, attr: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let root = document.get_element_by_id(root_id)?;
    root.get_attribute(&format!("data-{attr}"))
        .filter(|v| !v.is_empty())
}
