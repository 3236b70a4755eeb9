//! The `/calculate` wire payload and pre-flight validation.
//!
//! `FormValues` is the raw read of the page's input fields (missing element
//! -> `None`); `build_request` shapes it into the JSON body the backend
//! expects. Collection never validates; `validate` is the calculation
//! client's pre-flight gate and runs before any network call.

use serde::Serialize;

use crate::schedule::{period_count, DeltaSchedule};
use crate::ValidationError;

/// How the cost of delay is supplied: a single auto value or a per-period
/// manual schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaMode {
    Auto,
    Manual,
}

impl DeltaMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaMode::Auto => "auto",
            DeltaMode::Manual => "manual",
        }
    }
}

/// Raw form state as read from the page, one entry per input field.
///
/// Scalars are kept as the decimal strings the user typed; an absent or
/// empty field reads as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub asset_value: Option<String>,
    pub exercise_cost: Option<String>,
    pub maturity_time: Option<String>,
    pub volatility: Option<String>,
    pub risk_free_rate: Option<String>,
    pub delta_mode: Option<DeltaMode>,
    pub auto_delta: Option<String>,
}

impl FormValues {
    fn mode(&self) -> DeltaMode {
        self.delta_mode.unwrap_or(DeltaMode::Auto)
    }

    /// Names of required scalar fields that are missing, in display order.
    fn missing_fields(&self) -> Vec<&'static str> {
        let checks: [(&Option<String>, &'static str); 5] = [
            (&self.asset_value, "Asset Value V"),
            (&self.exercise_cost, "Exercise Cost K"),
            (&self.maturity_time, "Time to Maturity T"),
            (&self.volatility, "Volatility"),
            (&self.risk_free_rate, "Risk-free Rate r"),
        ];
        checks
            .iter()
            .filter(|(value, _)| value.is_none())
            .map(|(_, name)| *name)
            .collect()
    }
}

/// JSON body for `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRequest {
    #[serde(rename = "V")]
    pub asset_value: Option<String>,
    #[serde(rename = "K")]
    pub exercise_cost: Option<String>,
    #[serde(rename = "T")]
    pub maturity_time: Option<String>,
    pub sigma: Option<String>,
    pub r: Option<String>,
    #[serde(rename = "delta-mode")]
    pub delta_mode: DeltaMode,
    /// Single decimal (auto) or comma-joined periods `0..N-1` (manual).
    pub delta: String,
    /// Discrete period count, `round(T)` floored at 1.
    pub n: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<&'static str>,
}

/// Shape the current form state into a request payload.
///
/// No validation happens here; call [`validate`] first.
pub fn build_request(
    form: &FormValues,
    schedule: &DeltaSchedule,
    download: bool,
) -> CalculationRequest {
    let n = form
        .maturity_time
        .as_deref()
        .and_then(period_count)
        .unwrap_or(1);
    let delta = match form.mode() {
        DeltaMode::Auto => form.auto_delta.clone().unwrap_or_default(),
        DeltaMode::Manual => schedule.leading_csv(n),
    };
    CalculationRequest {
        asset_value: form.asset_value.clone(),
        exercise_cost: form.exercise_cost.clone(),
        maturity_time: form.maturity_time.clone(),
        sigma: form.volatility.clone(),
        r: form.risk_free_rate.clone(),
        delta_mode: form.mode(),
        delta,
        n,
        export: download.then_some("excel"),
    }
}

/// Pre-flight validation for `run`. Check order matches the user-facing
/// flow: delta inputs first, then required scalars.
pub fn validate(form: &FormValues, schedule: &DeltaSchedule) -> Result<(), ValidationError> {
    match form.mode() {
        DeltaMode::Auto => {
            if form.auto_delta.as_deref().map_or(true, |d| d.trim().is_empty()) {
                return Err(ValidationError::EmptyAutoDelta);
            }
        }
        DeltaMode::Manual => {
            let required = form
                .maturity_time
                .as_deref()
                .and_then(period_count)
                .unwrap_or(1);
            if (schedule.len() as u32) < required {
                return Err(ValidationError::ShortSchedule { required });
            }
        }
    }

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(mode: DeltaMode) -> FormValues {
        FormValues {
            asset_value: Some("570".into()),
            exercise_cost: Some("800".into()),
            maturity_time: Some("3".into()),
            volatility: Some("0.35".into()),
            risk_free_rate: Some("0.05".into()),
            delta_mode: Some(mode),
            auto_delta: Some("0.05".into()),
        }
    }

    #[test]
    fn test_auto_request_has_rounded_period_count() {
        let form = filled_form(DeltaMode::Auto);
        let request = build_request(&form, &DeltaSchedule::new(), false);
        assert_eq!(request.n, 3);
        assert_eq!(request.delta, "0.05");
        assert_eq!(request.export, None);
    }

    #[test]
    fn test_manual_delta_excludes_fixed_final_value() {
        let mut form = filled_form(DeltaMode::Manual);
        form.maturity_time = Some("2".into());
        let mut schedule = DeltaSchedule::new();
        schedule
            .commit(&["0.02".into(), "0.04".into(), "1.0".into()])
            .unwrap();

        let request = build_request(&form, &schedule, false);
        assert_eq!(request.n, 2);
        // Exactly round(T) comma-separated values, periods 0..N-1.
        assert_eq!(request.delta, "0.02,0.04");
    }

    #[test]
    fn test_download_marks_export() {
        let form = filled_form(DeltaMode::Auto);
        let request = build_request(&form, &DeltaSchedule::new(), true);
        assert_eq!(request.export, Some("excel"));
    }

    #[test]
    fn test_wire_field_names() {
        let form = filled_form(DeltaMode::Auto);
        let body = serde_json::to_value(build_request(&form, &DeltaSchedule::new(), false)).unwrap();
        assert_eq!(body["V"], "570");
        assert_eq!(body["K"], "800");
        assert_eq!(body["T"], "3");
        assert_eq!(body["sigma"], "0.35");
        assert_eq!(body["r"], "0.05");
        assert_eq!(body["delta-mode"], "auto");
        assert_eq!(body["n"], 3);
        assert!(body.get("export").is_none());
    }

    #[test]
    fn test_validate_rejects_empty_auto_delta() {
        let mut form = filled_form(DeltaMode::Auto);
        form.auto_delta = Some("  ".into());
        let err = validate(&form, &DeltaSchedule::new()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyAutoDelta);
    }

    #[test]
    fn test_validate_rejects_unopened_manual_schedule() {
        let mut form = filled_form(DeltaMode::Manual);
        form.maturity_time = Some("2".into());
        let err = validate(&form, &DeltaSchedule::new()).unwrap_err();
        assert_eq!(err, ValidationError::ShortSchedule { required: 2 });
        assert!(err.to_string().contains("requires 2 δ values"));
    }

    #[test]
    fn test_validate_names_missing_fields() {
        let mut form = filled_form(DeltaMode::Auto);
        form.exercise_cost = None;
        form.volatility = None;
        let err = validate(&form, &DeltaSchedule::new()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["Exercise Cost K", "Volatility"])
        );
    }

    #[test]
    fn test_validate_accepts_complete_manual_form() {
        let mut form = filled_form(DeltaMode::Manual);
        form.maturity_time = Some("2".into());
        let mut schedule = DeltaSchedule::new();
        schedule
            .commit(&["0.02".into(), "0.04".into(), "1.0".into()])
            .unwrap();
        assert!(validate(&form, &schedule).is_ok());
    }
}
