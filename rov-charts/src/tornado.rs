//! Tornado (range) chart: per-parameter option-value span.

use rov_model::TornadoRange;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Build a horizontal stacked-bar config from per-parameter ranges.
///
/// Parameters are sorted descending by range width (max - min) so the most
/// sensitive parameter appears first. Each bar is drawn as an invisible
/// offset segment up to `min` plus a visible segment of the width; the JS
/// glue reads the `bars` metadata for hover text (start value, range, end).
pub fn tornado_chart_config(tornado: &HashMap<String, TornadoRange>, title: &str) -> Value {
    let mut ranked: Vec<(&String, &TornadoRange)> = tornado.iter().collect();
    ranked.sort_by(|a, b| {
        let width_a = a.1.max - a.1.min;
        let width_b = b.1.max - b.1.min;
        width_b
            .partial_cmp(&width_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let labels: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
    let offsets: Vec<f64> = ranked.iter().map(|(_, r)| r.min).collect();
    let widths: Vec<f64> = ranked.iter().map(|(_, r)| r.max - r.min).collect();
    let bars: Vec<Value> = ranked
        .iter()
        .map(|(name, r)| json!({ "name": name, "min": r.min, "max": r.max }))
        .collect();

    json!({
        "kind": "tornado",
        "type": "bar",
        "bars": bars,
        "data": {
            "labels": labels,
            "datasets": [
                {
                    "label": "offset",
                    "data": offsets,
                    "backgroundColor": "rgba(0, 0, 0, 0)",
                },
                {
                    "label": "Option value range",
                    "data": widths,
                    "backgroundColor": "#1f77b4",
                },
            ],
        },
        "options": {
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": { "display": true, "text": title },
                "legend": { "display": false },
            },
            "scales": {
                "x": { "stacked": true },
                "y": { "stacked": true },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> TornadoRange {
        TornadoRange {
            min,
            max,
            base_value: 0.0,
        }
    }

    #[test]
    fn test_parameters_ranked_by_descending_width() {
        let mut tornado = HashMap::new();
        tornado.insert("Exercise Cost (K)".to_string(), range(5.0, 9.0)); // width 4
        tornado.insert("Volatility".to_string(), range(2.0, 10.0)); // width 8
        tornado.insert("Risk-free Rate (r)".to_string(), range(6.0, 7.0)); // width 1

        let config = tornado_chart_config(&tornado, "Tornado");
        assert_eq!(
            config["data"]["labels"],
            json!(["Volatility", "Exercise Cost (K)", "Risk-free Rate (r)"])
        );
    }

    #[test]
    fn test_offset_segment_is_invisible_and_sums_to_max() {
        let mut tornado = HashMap::new();
        tornado.insert("Volatility".to_string(), range(2.0, 10.0));

        let config = tornado_chart_config(&tornado, "Tornado");
        let datasets = config["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets[0]["backgroundColor"], "rgba(0, 0, 0, 0)");
        assert_eq!(datasets[0]["data"], json!([2.0]));
        assert_eq!(datasets[1]["data"], json!([8.0]));
    }

    #[test]
    fn test_bar_metadata_reports_min_and_max() {
        let mut tornado = HashMap::new();
        tornado.insert("Volatility".to_string(), range(2.0, 10.0));

        let config = tornado_chart_config(&tornado, "Tornado");
        assert_eq!(
            config["bars"],
            json!([{ "name": "Volatility", "min": 2.0, "max": 10.0 }])
        );
        assert_eq!(config["options"]["indexAxis"], "y");
    }
}
