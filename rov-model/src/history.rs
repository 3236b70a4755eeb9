//! Past-calculation history entries.
//!
//! Owned by the backend (`GET /api/user/history`, capped at 15 entries);
//! the client holds a transient list for the panel and discards it when the
//! panel closes. Input parameters are keyed by display name, not wire name.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

/// Fixed display order for echoed scalar inputs.
const SCALAR_FIELDS: [&str; 5] = [
    "Asset Value V",
    "Exercise Cost K",
    "Time to Maturity T",
    "Volatility",
    "Risk-free Rate r",
];

/// One stored calculation, as returned by `GET /api/user/history`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: i64,
    /// Backend format: `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Echoed inputs keyed by display name.
    pub input_params: Value,
    /// Scalar result; the backend may send `"N/A"` for legacy rows.
    pub initial_option_value: Value,
}

impl HistoryEntry {
    /// Timestamp for display, falling back to the raw string when the
    /// backend format does not parse.
    pub fn formatted_timestamp(&self) -> String {
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%d %H:%M:%S")
            .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }

    /// Option value as display text, 4 decimal places for numbers.
    pub fn option_value_text(&self) -> String {
        match &self.initial_option_value {
            Value::Number(n) => n
                .as_f64()
                .map(|v| format!("{v:.4}"))
                .unwrap_or_else(|| n.to_string()),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// (label, value) pairs for the expanded detail view: the five scalars
    /// in fixed order, then the delta information per the recorded mode.
    pub fn display_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        for name in SCALAR_FIELDS {
            if let Some(value) = self.input_params.get(name) {
                fields.push((name.to_string(), plain_text(value)));
            }
        }

        let mode = self
            .input_params
            .get("Delta Mode")
            .and_then(Value::as_str)
            .unwrap_or("auto");
        if mode == "manual" {
            let joined = self
                .input_params
                .get("Cost of Delay (Manual Mode)")
                .and_then(Value::as_array)
                .map(|values| {
                    values
                        .iter()
                        .map(plain_text)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            fields.push(("Cost of Delay (Manual)".to_string(), joined));
        } else if let Some(value) = self.input_params.get("Cost of Delay (t=0)") {
            fields.push(("Cost of Delay (t=0)".to_string(), plain_text(value)));
        }
        fields
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(params: Value) -> HistoryEntry {
        HistoryEntry {
            id: 1,
            timestamp: "2026-08-23 14:05:00".to_string(),
            input_params: params,
            initial_option_value: json!(12.3456),
        }
    }

    #[test]
    fn test_timestamp_formats_and_falls_back() {
        let mut e = entry(json!({}));
        assert_eq!(e.formatted_timestamp(), "23 Aug 2026, 14:05");
        e.timestamp = "not a date".to_string();
        assert_eq!(e.formatted_timestamp(), "not a date");
    }

    #[test]
    fn test_option_value_text_handles_na() {
        let mut e = entry(json!({}));
        assert_eq!(e.option_value_text(), "12.3456");
        e.initial_option_value = json!("N/A");
        assert_eq!(e.option_value_text(), "N/A");
    }

    #[test]
    fn test_display_fields_fixed_order_auto_mode() {
        let e = entry(json!({
            "Risk-free Rate r": 0.05,
            "Asset Value V": 570,
            "Volatility": 0.35,
            "Exercise Cost K": 800,
            "Time to Maturity T": 3,
            "Delta Mode": "auto",
            "Cost of Delay (t=0)": 0.05
        }));
        let labels: Vec<_> = e.display_fields().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec![
                "Asset Value V",
                "Exercise Cost K",
                "Time to Maturity T",
                "Volatility",
                "Risk-free Rate r",
                "Cost of Delay (t=0)"
            ]
        );
    }

    #[test]
    fn test_display_fields_joins_manual_sequence() {
        let e = entry(json!({
            "Asset Value V": 570,
            "Delta Mode": "manual",
            "Cost of Delay (Manual Mode)": [0.02, 0.04]
        }));
        let fields = e.display_fields();
        let delta = fields.last().unwrap();
        assert_eq!(delta.0, "Cost of Delay (Manual)");
        assert_eq!(delta.1, "0.02, 0.04");
    }
}
