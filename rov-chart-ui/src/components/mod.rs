//! Reusable Dioxus RSX components for the valuation dashboard.

mod chart_panel;
mod error_display;
mod loading_spinner;
mod modal_overlay;
mod panel_header;

pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use modal_overlay::ModalOverlay;
pub use panel_header::PanelHeader;
