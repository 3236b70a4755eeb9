//! Inline error box for the result area.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Error text shown in place of a valuation result. Prior results stay on
/// screen above it; this only reports why the latest run produced none.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 8px 12px; margin: 4px 0; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px; font-size: 13px;",
            "{props.message}"
        }
    }
}
