//! Calculation response structures.
//!
//! Everything here is read-only data received per request from the backend;
//! nothing is persisted client-side.

use serde::Deserialize;
use std::collections::HashMap;

/// Fixed unit suffix for the displayed option value.
pub const VALUE_UNIT: &str = "€1000s";

/// Top-level `/calculate` response body (non-export variant).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CalculationResult {
    pub summary: Summary,
    #[serde(default)]
    pub sensitivity: Option<SensitivityBundle>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Summary {
    pub initial_option_value: f64,
}

/// Sensitivity datasets returned alongside a valuation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SensitivityBundle {
    /// Option value vs volatility, one series per asset-value scenario.
    pub line_chart_v_sigma: LineSeries,
    /// Option value vs volatility, one series per cost-of-delay scenario.
    pub line_chart_delta_sigma: LineSeries,
    /// Per-parameter (min, max) option-value range.
    pub tornado: HashMap<String, TornadoRange>,
    /// Per-parameter relative sensitivity percentage.
    pub spider: HashMap<String, f64>,
    #[serde(default)]
    pub base_option_value: f64,
}

/// Labeled scenario series sharing one x-axis.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LineSeries {
    pub x_labels: Vec<f64>,
    pub data: HashMap<String, Vec<f64>>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct TornadoRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub base_value: f64,
}

/// Result-area text for a valuation, 4 decimal places plus the unit suffix.
pub fn display_value(initial_option_value: f64) -> String {
    format!("Option Value: {initial_option_value:.4} {VALUE_UNIT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_format() {
        assert_eq!(display_value(12.3456), "Option Value: 12.3456 €1000s");
        assert_eq!(display_value(7.0), "Option Value: 7.0000 €1000s");
    }

    #[test]
    fn test_parse_result_without_sensitivity() {
        let result: CalculationResult =
            serde_json::from_str(r#"{"summary":{"initial_option_value":12.3456}}"#).unwrap();
        assert_eq!(result.summary.initial_option_value, 12.3456);
        assert!(result.sensitivity.is_none());
    }

    #[test]
    fn test_parse_full_sensitivity_bundle() {
        let body = r#"{
            "summary": {"initial_option_value": 88.1},
            "sensitivity": {
                "line_chart_v_sigma": {"x_labels": [0.2, 0.3], "data": {"V=570k": [1.0, 2.0]}},
                "line_chart_delta_sigma": {"x_labels": [0.2, 0.3], "data": {"Cost of Delay=5.0%": [3.0, 4.0]}},
                "tornado": {"Volatility": {"min": 2.0, "max": 10.0, "base_value": 5.0}},
                "spider": {"Volatility": 42.5},
                "base_option_value": 88.1
            }
        }"#;
        let result: CalculationResult = serde_json::from_str(body).unwrap();
        let bundle = result.sensitivity.unwrap();
        assert_eq!(bundle.line_chart_v_sigma.x_labels, vec![0.2, 0.3]);
        assert_eq!(bundle.tornado["Volatility"].max, 10.0);
        assert_eq!(bundle.spider["Volatility"], 42.5);
    }
}
