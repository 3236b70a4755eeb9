//! Profile dropdown, calculation history panel, and the info modal.
//!
//! The history list is transient: fetched when the panel opens, discarded
//! when it closes. A failed fetch renders an inline re-login hint instead
//! of throwing. Selection is mutually exclusive and expands the stored
//! inputs in a fixed display order.

use dioxus::prelude::*;
use rov_chart_ui::components::{LoadingSpinner, ModalOverlay};
use rov_chart_ui::state::AppState;

use crate::actions;

/// Profile icon plus login-aware dropdown.
#[component]
pub fn ProfileMenu() -> Element {
    let mut state = use_context::<AppState>();
    let open = (state.profile_open)();
    let user = (state.user)();

    rsx! {
        div {
            style: "position: relative;",
            button {
                id: "profile-icon",
                style: "width: 36px; height: 36px; border-radius: 50%; border: 1px solid #ccc; background: #fff; cursor: pointer; font-size: 16px;",
                onclick: move |_| {
                    let next = !(state.profile_open)();
                    state.profile_open.set(next);
                    if !next {
                        state.close_history();
                    }
                },
                "👤"
            }

            if open {
                // Transparent backdrop: any click outside the dropdown
                // closes it.
                div {
                    style: "position: fixed; inset: 0; z-index: 900;",
                    onclick: move |_| {
                        state.profile_open.set(false);
                        state.close_history();
                    },
                }
                div {
                    id: "profile-dropdown",
                    style: "position: absolute; right: 0; top: 42px; z-index: 950; width: 320px; background: #fff; border: 1px solid #ddd; border-radius: 6px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); padding: 12px;",
                    onclick: move |evt| evt.stop_propagation(),

                    if let Some(user) = user {
                        p { style: "margin: 0; font-weight: bold;", "{user.username}" }
                        p { style: "margin: 0 0 8px 0; font-size: 12px; color: #666;", "{user.email}" }
                        div {
                            style: "display: flex; gap: 8px; margin-bottom: 8px;",
                            button {
                                id: "btn-history",
                                style: "padding: 4px 10px; cursor: pointer;",
                                onclick: move |_| {
                                    spawn(actions::show_history(state));
                                },
                                "History"
                            }
                            a {
                                href: "/logout",
                                style: "padding: 4px 10px; font-size: 14px;",
                                "Log out"
                            }
                        }
                        if (state.history_open)() {
                            HistoryPanel {}
                        }
                    } else {
                        p { style: "margin: 0 0 8px 0; font-size: 14px;", "Not logged in." }
                        a { href: "/login", "Log in" }
                    }
                }
            }
        }
    }
}

/// Past calculations, newest first; the backend keeps at most 15.
#[component]
fn HistoryPanel() -> Element {
    let mut state = use_context::<AppState>();
    let entries = state.history.read().clone();
    let selected = (state.selected_entry)();

    rsx! {
        div {
            id: "history-panel",
            style: "border-top: 1px solid #eee; padding-top: 8px; max-height: 360px; overflow-y: auto;",
            p {
                style: "margin: 0 0 6px 0; font-size: 12px; color: #666;",
                "Past calculations (the last 15 are kept)"
            }

            if (state.history_loading)() {
                LoadingSpinner { message: "Fetching your calculation history…".to_string() }
            } else if let Some(err) = (state.history_error)() {
                p { style: "margin: 0; font-size: 13px; color: #C62828;", "{err}" }
            } else if entries.is_empty() {
                p { style: "margin: 0; font-size: 13px; color: #666;", "No calculation history yet." }
            } else {
                for (index, entry) in entries.iter().enumerate() {
                    div {
                        key: "{entry.id}",
                        style: if selected == Some(index) {
                            "padding: 6px; border-radius: 4px; cursor: pointer; background: #E3F2FD;"
                        } else {
                            "padding: 6px; border-radius: 4px; cursor: pointer;"
                        },
                        onclick: move |_| state.selected_entry.set(Some(index)),

                        p {
                            style: "margin: 0; font-size: 12px; color: #666;",
                            "{entry.formatted_timestamp()}"
                        }
                        p {
                            style: "margin: 0; font-size: 13px;",
                            "Option Value: {entry.option_value_text()} €1000s"
                        }

                        if selected == Some(index) {
                            div {
                                style: "margin-top: 4px; font-size: 12px;",
                                for (label, value) in entry.display_fields() {
                                    p {
                                        key: "{label}",
                                        style: "margin: 0;",
                                        strong { "{label}: " }
                                        "{value}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Short explanation of the model inputs; overlay click dismisses.
#[component]
pub fn InfoModal() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        ModalOverlay {
            on_dismiss: move |_| state.info_open.set(false),

            h3 { style: "margin: 0 0 8px 0;", "About the model" }
            p {
                style: "font-size: 14px; line-height: 1.5;",
                "The option value is computed on a binomial tree with one step "
                "per period. V is the present value of the underlying asset, "
                "K the cost of exercising (investing), T the time to maturity "
                "in years, σ the volatility of the asset value, and r the "
                "risk-free rate. The cost of delay δ is the per-period value "
                "lost by waiting; in manual mode you supply one δ per period, "
                "with the final period fixed at 1.0."
            }
            div {
                style: "display: flex; justify-content: flex-end;",
                button {
                    style: "padding: 6px 16px;",
                    onclick: move |_| state.info_open.set(false),
                    "Close"
                }
            }
        }
    }
}
