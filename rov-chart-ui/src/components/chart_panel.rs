//! Chart panel component: a titled canvas for Chart.js to render into.

use dioxus::prelude::*;

/// Props for ChartPanel
#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// The canvas DOM id the chart renderer binds to
    pub canvas_id: String,
    /// Panel heading shown above the canvas
    pub title: String,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A bordered panel holding one chart canvas.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "position: relative; min-height: {}px; padding: 12px; border: 1px solid #e0e0e0; border-radius: 6px; background: #fff;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            h4 {
                style: "margin: 0 0 8px 0; font-size: 14px; color: #333;",
                "{props.title}"
            }
            canvas {
                id: "{props.canvas_id}",
                style: "width: 100%;",
            }
        }
    }
}
