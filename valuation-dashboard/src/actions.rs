//! User-triggered actions: the calculation client and the history fetch.
//!
//! `run` owns the collect -> validate -> request -> render sequence; each
//! stage strictly precedes the next through `await` ordering. Every failure
//! is terminal for the current invocation and leaves the UI interactive;
//! nothing here propagates an error to the caller.

use dioxus::prelude::{ReadableExt, WritableExt};
use rov_chart_ui::api::{self, ApiError};
use rov_chart_ui::js_bridge::{self, NoticeKind};
use rov_chart_ui::state::AppState;
use rov_model::{build_request, result::display_value, validate};

/// Run a calculation. With `download` set, the payload is marked for
/// spreadsheet export and the binary response saved as `tree.xlsx`.
pub async fn run(mut state: AppState, download: bool) {
    let form = state.form_values();
    let schedule = state.schedule.read().clone();

    if let Err(err) = validate(&form, &schedule) {
        js_bridge::notify(&err.to_string(), NoticeKind::Error);
        return;
    }

    let payload = build_request(&form, &schedule, download);

    if download {
        match api::post_calculate_export(&payload).await {
            Ok(bytes) => match api::save_file("tree.xlsx", api::XLSX_MIME, &bytes) {
                Ok(()) => {
                    js_bridge::notify("Spreadsheet download started (tree.xlsx).", NoticeKind::Success)
                }
                Err(err) => {
                    log::error!("file save failed: {}", err);
                    js_bridge::notify(&format!("Download failed: {err}"), NoticeKind::Error);
                }
            },
            Err(err) => {
                log::error!("export request failed: {}", err);
                js_bridge::notify(&download_error_text(&err), NoticeKind::Error);
            }
        }
        return;
    }

    match api::post_calculate(&payload).await {
        Ok(result) => {
            state.result_error.set(None);
            state
                .result_text
                .set(Some(display_value(result.summary.initial_option_value)));
            state.sensitivity.set(result.sensitivity);
            js_bridge::notify("Calculation complete.", NoticeKind::Success);
        }
        Err(err) => {
            // Prior results stay on screen; the error shows inline and as
            // a notification.
            log::error!("calculation failed: {}", err);
            let text = err.to_string();
            state.result_error.set(Some(text.clone()));
            js_bridge::notify(&text, NoticeKind::Error);
        }
    }
}

/// Download failures always name the status code when one exists.
fn download_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Status { code, message: Some(msg) } => {
            format!("Download failed (status {code}): {msg}")
        }
        ApiError::Status { code, message: None } => format!("Download failed (status {code})."),
        ApiError::Network(msg) => format!("Download failed: {msg}"),
    }
}

/// Open the history panel and fetch the stored calculations.
pub async fn show_history(mut state: AppState) {
    state.history.set(Vec::new());
    state.history_error.set(None);
    state.selected_entry.set(None);
    state.history_loading.set(true);
    state.history_open.set(true);

    match api::fetch_history().await {
        Ok(entries) => {
            log::info!("history: {} entries", entries.len());
            state.history.set(entries);
        }
        Err(err) => {
            log::error!("history fetch failed: {}", err);
            state.history_error.set(Some(format!(
                "Could not load history ({err}). Please log in again."
            )));
        }
    }
    state.history_loading.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_error_names_status_code() {
        let text = download_error_text(&ApiError::Status {
            code: 500,
            message: None,
        });
        assert_eq!(text, "Download failed (status 500).");
    }

    #[test]
    fn test_download_error_keeps_server_message_and_code() {
        let text = download_error_text(&ApiError::Status {
            code: 400,
            message: Some("Manual Cost of Delay values must be valid numbers.".to_string()),
        });
        assert!(text.contains("status 400"));
        assert!(text.contains("valid numbers"));
    }

    #[test]
    fn test_download_error_network_variant() {
        let text = download_error_text(&ApiError::Network("fetch failed".to_string()));
        assert_eq!(text, "Download failed: fetch failed");
    }
}
