//! Modal overlay with outside-click dismissal.
//!
//! Clicking the dimmed overlay closes the modal; clicks inside the content
//! box stop propagation so they never reach the overlay. Both the schedule
//! editor and the info modal use this same pattern.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModalOverlayProps {
    /// Invoked when the user clicks outside the content box.
    pub on_dismiss: EventHandler<()>,
    pub children: Element,
}

/// Full-screen overlay hosting centered modal content.
#[component]
pub fn ModalOverlay(props: ModalOverlayProps) -> Element {
    let on_dismiss = props.on_dismiss;
    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 1000; background: rgba(0, 0, 0, 0.4); display: flex; justify-content: center; align-items: center;",
            onclick: move |_| on_dismiss.call(()),
            div {
                style: "background: #fff; border-radius: 6px; padding: 20px; max-width: 520px; width: 90%; max-height: 80vh; overflow-y: auto;",
                onclick: move |evt| evt.stop_propagation(),
                {props.children}
            }
        }
    }
}
