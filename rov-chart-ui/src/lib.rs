//! Shared Dioxus layer for the valuation dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js rendering and toast
//!   notifications via `js_sys::eval()`
//! - `api`: fetch wrappers for the `/calculate` and history endpoints,
//!   plus the client-side file save
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (chart panels, modals, etc.)

pub mod api;
pub mod components;
pub mod js_bridge;
pub mod state;
