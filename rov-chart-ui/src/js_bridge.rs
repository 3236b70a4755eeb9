//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js itself is loaded by the surrounding page; the glue in
//! `assets/js/*.js` is embedded at compile time and evaluated at startup.
//! Rendering waits for both the library and the target canvas with a
//! polling loop, since the canvas only exists after Dioxus mounts it.

// Embed the chart/notification glue at compile time
static CHARTS_JS: &str = include_str!("../assets/js/valuation-charts.js");
static NOTIFY_JS: &str = include_str!("../assets/js/notify.js");

/// Notification styling variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ROV JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the JS glue. Call once at app startup.
///
/// The notification helper has no library dependency and is promoted to
/// `window.*` immediately. The chart glue waits for Chart.js to load via a
/// polling loop, then sets `window.__rovChartsReady`.
pub fn init_charts() {
    let _ = js_sys::eval(NOTIFY_JS);
    call_js("if (typeof rovNotify !== 'undefined') window.rovNotify = rovNotify;");

    // Store the chart glue on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__rovChartScripts = {};",
        serde_json::to_string(CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__rovChartsReady) { return; }
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__rovChartScripts);
                    delete window.__rovChartScripts;
                    if (typeof renderValuationChart !== 'undefined') window.renderValuationChart = renderValuationChart;
                    if (typeof destroyValuationChart !== 'undefined') window.destroyValuationChart = destroyValuationChart;
                    window.__rovChartsReady = true;
                    console.log('ROV charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a Chart.js chart into the given canvas, replacing any chart
/// already bound to it.
///
/// Polls until Chart.js is ready and the canvas exists in the DOM.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    let escaped_config = serde_json::to_string(config_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__rovChartsReady &&
                    typeof window.renderValuationChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderValuationChart('{canvas_id}', {escaped_config});
                    }} catch(e) {{ console.error('[ROV] renderValuationChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart bound to the given canvas, if any.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyValuationChart !== 'undefined') window.destroyValuationChart('{}');",
        canvas_id
    ));
}

/// Show a transient toast notification (fire-and-forget).
pub fn notify(message: &str, kind: NoticeKind) {
    let escaped = serde_json::to_string(message).unwrap_or_default();
    call_js(&format!(
        "if (typeof window.rovNotify !== 'undefined') window.rovNotify({escaped}, '{}');",
        kind.as_str()
    ));
}
