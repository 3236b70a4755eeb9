//! Real-Option Valuation Dashboard
//!
//! Prices an investment-timing option through the backend `/calculate`
//! endpoint and renders the valuation plus four sensitivity charts. The
//! numerical model (a binomial tree) lives entirely server-side; this app
//! collects inputs, manages the manual cost-of-delay schedule, and reshapes
//! the returned sensitivity bundle into Chart.js configurations.
//!
//! Control flow:
//! 1. The parameter form and schedule editor maintain input state.
//! 2. Run/Download build and validate the payload, then call `/calculate`.
//! 3. A normal run writes the option value into the result area and stores
//!    the sensitivity bundle; an effect re-renders the charts from it.
//! 4. The profile panel independently fetches `/api/user/history`.
//!
//! Chart.js itself is loaded by the surrounding page; the bridge waits for
//! it with a polling loop before the first render.

mod actions;
mod editor;
mod form;
mod profile;

use dioxus::prelude::*;
use rov_chart_ui::components::{ChartPanel, ErrorDisplay, PanelHeader};
use rov_chart_ui::state::{AppState, UserInfo};
use rov_chart_ui::{api, js_bridge};

use editor::DeltaScheduleEditor;
use form::ParameterForm;
use profile::{InfoModal, ProfileMenu};

/// DOM id the app mounts into; the page exposes the logged-in user via
/// `data-username` / `data-email` on this element.
const ROOT_ID: &str = "valuation-root";

/// Canvas ids the chart renderers bind to.
const LINE_V_SIGMA_ID: &str = "line-chart-v-sigma";
const LINE_DELTA_SIGMA_ID: &str = "line-chart-delta-sigma";
const TORNADO_ID: &str = "tornado-chart";
const SPIDER_ID: &str = "spider-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

/// Serialize a chart config and hand it to the JS bridge.
fn render(canvas_id: &str, config: serde_json::Value) {
    match serde_json::to_string(&config) {
        Ok(json) => js_bridge::render_chart(canvas_id, &json),
        Err(e) => log::error!("chart config serialization failed: {}", e),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One-time setup: JS glue plus user identity from the mount element
    use_effect(move || {
        js_bridge::init_charts();
        if let Some(username) = api::mount_attribute(ROOT_ID, "username") {
            let email = api::mount_attribute(ROOT_ID, "email").unwrap_or_default();
            state.user.set(Some(UserInfo { username, email }));
        }
    });

    // Re-render all four charts whenever a new sensitivity bundle lands
    use_effect(move || match &*state.sensitivity.read() {
        Some(bundle) => {
            log::info!("rendering sensitivity charts");
            render(
                LINE_V_SIGMA_ID,
                rov_charts::line_chart_config(
                    &bundle.line_chart_v_sigma,
                    "Option Value vs Volatility (Asset-Value scenarios)",
                    "Option Value (€1000s)",
                ),
            );
            render(
                LINE_DELTA_SIGMA_ID,
                rov_charts::line_chart_config(
                    &bundle.line_chart_delta_sigma,
                    "Option Value vs Volatility (Cost-of-Delay scenarios)",
                    "Option Value (€1000s)",
                ),
            );
            render(
                TORNADO_ID,
                rov_charts::tornado_chart_config(&bundle.tornado, "Parameter Sensitivity (Tornado)"),
            );
            render(
                SPIDER_ID,
                rov_charts::spider_chart_config(&bundle.spider, "Relative Sensitivity (Spider)"),
            );
        }
        None => {
            for id in [LINE_V_SIGMA_ID, LINE_DELTA_SIGMA_ID, TORNADO_ID, SPIDER_ID] {
                js_bridge::destroy_chart(id);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; max-width: 1100px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                PanelHeader {
                    title: "Real-Option Valuation".to_string(),
                    description: "Binomial-tree pricing of an investment-timing option. Values in €1000s.".to_string(),
                }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        id: "btn-info",
                        style: "width: 36px; height: 36px; border-radius: 50%; border: 1px solid #ccc; background: #fff; cursor: pointer;",
                        onclick: move |_| state.info_open.set(true),
                        "ℹ"
                    }
                    ProfileMenu {}
                }
            }

            ParameterForm {}

            div {
                id: "result-area",
                style: "margin: 16px 0; min-height: 28px;",
                if let Some(err) = (state.result_error)() {
                    ErrorDisplay { message: err }
                }
                if let Some(text) = (state.result_text)() {
                    p {
                        style: "margin: 4px 0; font-size: 18px; font-weight: bold; color: #1b5e20;",
                        "{text}"
                    }
                }
            }

            if (state.sensitivity)().is_some() {
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    ChartPanel {
                        canvas_id: LINE_V_SIGMA_ID.to_string(),
                        title: "Volatility × Asset Value".to_string(),
                    }
                    ChartPanel {
                        canvas_id: LINE_DELTA_SIGMA_ID.to_string(),
                        title: "Volatility × Cost of Delay".to_string(),
                    }
                    ChartPanel {
                        canvas_id: TORNADO_ID.to_string(),
                        title: "Tornado".to_string(),
                    }
                    ChartPanel {
                        canvas_id: SPIDER_ID.to_string(),
                        title: "Spider".to_string(),
                    }
                }
            }

            if (state.editor_open)() {
                DeltaScheduleEditor {}
            }
            if (state.info_open)() {
                InfoModal {}
            }
        }
    }
}
