//! Parameter form: the five scalar inputs, the delta-mode toggle, and the
//! run/download buttons.
//!
//! Editing the maturity-time field resets the stored manual schedule, since
//! the period count it was built for is no longer valid.

use dioxus::prelude::*;
use rov_chart_ui::state::AppState;
use rov_model::DeltaMode;

use crate::actions;
use crate::editor;

#[derive(Props, Clone, PartialEq)]
struct NumberFieldProps {
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
}

/// One labeled numeric input bound to a form signal.
#[component]
fn NumberField(props: NumberFieldProps) -> Element {
    let mut value = props.value;
    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-width: 140px;",
            label {
                r#for: "{props.id}",
                style: "font-size: 12px; font-weight: bold; margin-bottom: 2px;",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                r#type: "number",
                step: "any",
                placeholder: "{props.placeholder}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

/// The full parameter form.
#[component]
pub fn ParameterForm() -> Element {
    let mut state = use_context::<AppState>();
    let mode = (state.delta_mode)();
    let maturity = (state.maturity_time)();

    rsx! {
        div {
            style: "padding: 16px; border: 1px solid #e0e0e0; border-radius: 6px; background: #fafafa;",

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;",
                NumberField {
                    id: "input-asset-value",
                    label: "Asset Value V (€1000s)",
                    placeholder: "e.g. 570",
                    value: state.asset_value,
                }
                NumberField {
                    id: "input-exercise-cost",
                    label: "Exercise Cost K (€1000s)",
                    placeholder: "e.g. 800",
                    value: state.exercise_cost,
                }
                div {
                    style: "display: flex; flex-direction: column; min-width: 140px;",
                    label {
                        r#for: "input-maturity-time",
                        style: "font-size: 12px; font-weight: bold; margin-bottom: 2px;",
                        "Time to Maturity T (years)"
                    }
                    input {
                        id: "input-maturity-time",
                        r#type: "number",
                        step: "any",
                        placeholder: "e.g. 3",
                        value: "{maturity}",
                        oninput: move |evt| {
                            state.maturity_time.set(evt.value());
                            // The stored schedule was built for the old
                            // period count.
                            state.schedule.write().reset();
                        },
                    }
                }
                NumberField {
                    id: "input-volatility",
                    label: "Volatility σ",
                    placeholder: "e.g. 0.35",
                    value: state.volatility,
                }
                NumberField {
                    id: "input-risk-free-rate",
                    label: "Risk-free Rate r",
                    placeholder: "e.g. 0.05",
                    value: state.risk_free_rate,
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-top: 12px;",
                div {
                    style: "display: flex; flex-direction: column;",
                    label {
                        r#for: "input-delta-mode",
                        style: "font-size: 12px; font-weight: bold; margin-bottom: 2px;",
                        "Cost of Delay δ mode"
                    }
                    select {
                        id: "input-delta-mode",
                        onchange: move |evt| {
                            let mode = if evt.value() == "manual" {
                                DeltaMode::Manual
                            } else {
                                DeltaMode::Auto
                            };
                            state.delta_mode.set(mode);
                        },
                        option { value: "auto", selected: mode == DeltaMode::Auto, "Auto" }
                        option { value: "manual", selected: mode == DeltaMode::Manual, "Manual" }
                    }
                }

                if mode == DeltaMode::Auto {
                    NumberField {
                        id: "input-auto-delta",
                        label: "Cost of Delay δ (t=0)",
                        placeholder: "e.g. 0.05",
                        value: state.auto_delta,
                    }
                } else {
                    button {
                        id: "btn-edit-schedule",
                        style: "padding: 6px 12px;",
                        onclick: move |_| editor::open_editor(state),
                        "Edit δ schedule…"
                    }
                }
            }

            div {
                style: "display: flex; gap: 12px; margin-top: 16px;",
                button {
                    id: "btn-run",
                    style: "padding: 8px 20px; background: #1f77b4; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        spawn(actions::run(state, false));
                    },
                    "Calculate"
                }
                button {
                    id: "btn-download",
                    style: "padding: 8px 20px; background: #2ca02c; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        spawn(actions::run(state, true));
                    },
                    "Download tree.xlsx"
                }
            }
        }
    }
}
