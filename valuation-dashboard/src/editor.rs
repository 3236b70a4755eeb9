//! Manual cost-of-delay schedule editor.
//!
//! Opens only with a valid positive maturity time, builds one numeric input
//! per period 0..=N (period N fixed at 1.0 and disabled), and commits the
//! whole schedule atomically on save. Cancel and outside-click leave stored
//! state untouched.

use dioxus::prelude::*;
use rov_chart_ui::components::ModalOverlay;
use rov_chart_ui::js_bridge::{self, NoticeKind};
use rov_chart_ui::state::AppState;
use rov_model::{period_count, ValidationError};

/// Open the editor, seeding drafts from the stored schedule.
///
/// Reports an error and stays closed when the maturity time does not parse
/// as a positive number.
pub fn open_editor(mut state: AppState) {
    let maturity = (state.maturity_time)();
    match period_count(&maturity) {
        Some(n) => {
            let drafts = state.schedule.read().draft_entries(n);
            state.editor_drafts.set(drafts);
            state.editor_error.set(None);
            state.editor_open.set(true);
        }
        None => {
            js_bridge::notify(
                &ValidationError::InvalidMaturity.to_string(),
                NoticeKind::Error,
            );
        }
    }
}

/// The schedule editor modal. Rendered only while open.
#[component]
pub fn DeltaScheduleEditor() -> Element {
    let mut state = use_context::<AppState>();
    let drafts = (state.editor_drafts)();
    let last = drafts.len().saturating_sub(1);

    let save = move |_| {
        let drafts = (state.editor_drafts)();
        let committed = state.schedule.write().commit(&drafts);
        match committed {
            Ok(()) => {
                state.editor_error.set(None);
                state.editor_open.set(false);
                js_bridge::notify("δ schedule saved.", NoticeKind::Success);
            }
            Err(err) => {
                let text = err.to_string();
                state.editor_error.set(Some(text.clone()));
                js_bridge::notify(&text, NoticeKind::Error);
            }
        }
    };

    rsx! {
        ModalOverlay {
            on_dismiss: move |_| state.editor_open.set(false),

            h3 { style: "margin: 0 0 4px 0;", "Manual Cost of Delay (δ) per period" }
            p {
                style: "margin: 0 0 12px 0; font-size: 12px; color: #666;",
                "One value per period. The final period is fixed at 1.0 (full value at maturity)."
            }

            if let Some(err) = (state.editor_error)() {
                div {
                    style: "margin-bottom: 8px; padding: 8px; background: #FFEBEE; color: #C62828; border-radius: 4px; font-size: 13px;",
                    "{err}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                for (period, draft) in drafts.iter().enumerate() {
                    div {
                        key: "{period}",
                        style: "display: flex; align-items: center; gap: 8px;",
                        label {
                            r#for: "delta-period-{period}",
                            style: "width: 70px; font-size: 13px;",
                            "t = {period}"
                        }
                        input {
                            id: "delta-period-{period}",
                            r#type: "number",
                            step: "any",
                            min: "0",
                            disabled: period == last,
                            value: "{draft}",
                            oninput: move |evt| {
                                state.editor_drafts.write()[period] = evt.value();
                            },
                        }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;",
                button {
                    id: "btn-schedule-cancel",
                    style: "padding: 6px 16px;",
                    onclick: move |_| state.editor_open.set(false),
                    "Cancel"
                }
                button {
                    id: "btn-schedule-save",
                    style: "padding: 6px 16px; background: #1f77b4; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: save,
                    "Save"
                }
            }
        }
    }
}
