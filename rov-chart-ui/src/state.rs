//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The manual delta schedule is the only page-
//! wide mutable value shared across components; it is single-writer because
//! only one UI interaction runs at a time on the WASM event loop.

use dioxus::prelude::*;
use rov_model::{DeltaMode, DeltaSchedule, FormValues, HistoryEntry, SensitivityBundle};

/// Identity of the logged-in user, read from the page markup at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
}

/// Shared state for the valuation dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    // Parameter form fields (decimal strings as typed)
    pub asset_value: Signal<String>,
    pub exercise_cost: Signal<String>,
    pub maturity_time: Signal<String>,
    pub volatility: Signal<String>,
    pub risk_free_rate: Signal<String>,
    pub delta_mode: Signal<DeltaMode>,
    pub auto_delta: Signal<String>,

    /// Manual cost-of-delay schedule; reset whenever maturity time changes.
    pub schedule: Signal<DeltaSchedule>,

    // Result area
    pub result_text: Signal<Option<String>>,
    pub result_error: Signal<Option<String>>,
    pub sensitivity: Signal<Option<SensitivityBundle>>,

    // Manual-schedule editor modal
    pub editor_open: Signal<bool>,
    pub editor_drafts: Signal<Vec<String>>,
    pub editor_error: Signal<Option<String>>,

    // Profile / history panel
    pub user: Signal<Option<UserInfo>>,
    pub profile_open: Signal<bool>,
    pub history_open: Signal<bool>,
    pub history_loading: Signal<bool>,
    pub history: Signal<Vec<HistoryEntry>>,
    pub history_error: Signal<Option<String>>,
    pub selected_entry: Signal<Option<usize>>,

    // Info modal
    pub info_open: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            asset_value: Signal::new(String::new()),
            exercise_cost: Signal::new(String::new()),
            maturity_time: Signal::new(String::new()),
            volatility: Signal::new(String::new()),
            risk_free_rate: Signal::new(String::new()),
            delta_mode: Signal::new(DeltaMode::Auto),
            auto_delta: Signal::new(String::new()),
            schedule: Signal::new(DeltaSchedule::new()),
            result_text: Signal::new(None),
            result_error: Signal::new(None),
            sensitivity: Signal::new(None),
            editor_open: Signal::new(false),
            editor_drafts: Signal::new(Vec::new()),
            editor_error: Signal::new(None),
            user: Signal::new(None),
            profile_open: Signal::new(false),
            history_open: Signal::new(false),
            history_loading: Signal::new(false),
            history: Signal::new(Vec::new()),
            history_error: Signal::new(None),
            selected_entry: Signal::new(None),
            info_open: Signal::new(false),
        }
    }

    /// Snapshot the form fields for payload building and validation.
    /// Empty fields read as `None`, matching the missing-element contract.
    pub fn form_values(&self) -> FormValues {
        let non_empty = |s: String| if s.trim().is_empty() { None } else { Some(s) };
        FormValues {
            asset_value: non_empty((self.asset_value)()),
            exercise_cost: non_empty((self.exercise_cost)()),
            maturity_time: non_empty((self.maturity_time)()),
            volatility: non_empty((self.volatility)()),
            risk_free_rate: non_empty((self.risk_free_rate)()),
            delta_mode: Some((self.delta_mode)()),
            auto_delta: non_empty((self.auto_delta)()),
        }
    }

    /// Close the history panel and drop its transient contents.
    pub fn close_history(&mut self) {
        self.history_open.set(false);
        self.history.set(Vec::new());
        self.history_error.set(None);
        self.selected_entry.set(None);
    }
}
