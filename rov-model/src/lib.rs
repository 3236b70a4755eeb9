//! Domain model for the real-option valuation dashboard.
//!
//! This crate holds the pure, WASM-free core: the `/calculate` wire payload,
//! the manual cost-of-delay schedule and its editing rules, the calculation
//! result structures, and history entries. The view layer stays thin so
//! everything here is unit-testable without a live page.

pub mod history;
pub mod request;
pub mod result;
pub mod schedule;

pub use history::HistoryEntry;
pub use request::{build_request, validate, CalculationRequest, DeltaMode, FormValues};
pub use result::{CalculationResult, LineSeries, SensitivityBundle, Summary, TornadoRange};
pub use schedule::{period_count, DeltaSchedule};

/// Errors surfaced to the user before any network call is made.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Auto mode selected but the cost-of-delay field is empty.
    EmptyAutoDelta,
    /// Manual mode selected but the stored schedule is shorter than the
    /// period count the current maturity time requires.
    ShortSchedule { required: u32 },
    /// One or more required scalar fields are missing or empty.
    MissingFields(Vec<&'static str>),
    /// The maturity-time field does not parse as a positive number.
    InvalidMaturity,
    /// A manual-schedule entry failed to parse or was negative.
    BadScheduleValue { period: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyAutoDelta => {
                write!(f, "Please enter a cost of delay (δ) value.")
            }
            ValidationError::ShortSchedule { required } => write!(
                f,
                "Manual mode requires {required} δ values. Open the schedule editor to provide them."
            ),
            ValidationError::MissingFields(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            ValidationError::InvalidMaturity => {
                write!(f, "Time to maturity T must be a positive number.")
            }
            ValidationError::BadScheduleValue { period } => write!(
                f,
                "δ for period {period} must be a number greater than or equal to 0."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
