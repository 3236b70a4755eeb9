//! Wait indicator for in-flight requests.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// What the user is waiting on
    #[props(default = "Fetching…".to_string())]
    pub message: String,
}

/// Small centered indicator shown while a request is outstanding.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 16px; color: #666; font-size: 13px; font-style: italic;",
            "{props.message}"
        }
    }
}
