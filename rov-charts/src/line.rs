//! Scenario line charts (option value vs volatility).

use rov_model::LineSeries;
use serde_json::{json, Value};

use crate::{color, first_numeric_token};

/// Build a line-chart config from one scenario series payload.
///
/// Datasets are sorted ascending by the first numeric token of the raw key
/// so that e.g. `V=570k` draws before `V=713k` regardless of payload order.
/// Labels substitute the `Cost of Delay` prefix with the short symbol `δ`.
pub fn line_chart_config(series: &LineSeries, title: &str, y_label: &str) -> Value {
    let mut keys: Vec<&String> = series.data.keys().collect();
    keys.sort_by(|a, b| {
        first_numeric_token(a)
            .partial_cmp(&first_numeric_token(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let datasets: Vec<Value> = keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            json!({
                "label": key.replace("Cost of Delay", "δ"),
                "data": series.data[*key],
                "borderColor": color(i),
                "backgroundColor": color(i),
                "fill": false,
                "tension": 0.1,
            })
        })
        .collect();

    json!({
        "kind": "line",
        "type": "line",
        "data": {
            "labels": series.x_labels,
            "datasets": datasets,
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": { "display": true, "text": title },
                "legend": { "position": "bottom" },
            },
            "scales": {
                "x": { "title": { "display": true, "text": "Volatility σ" } },
                "y": { "title": { "display": true, "text": y_label } },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn series(keys: &[&str]) -> LineSeries {
        LineSeries {
            x_labels: vec![0.2, 0.3, 0.4],
            data: keys
                .iter()
                .map(|k| (k.to_string(), vec![1.0, 2.0, 3.0]))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn dataset_labels(config: &Value) -> Vec<String> {
        config["data"]["datasets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["label"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_datasets_sorted_by_numeric_token() {
        let config = line_chart_config(&series(&["V=713k", "V=456k", "V=570k"]), "t", "y");
        assert_eq!(dataset_labels(&config), vec!["V=456k", "V=570k", "V=713k"]);
    }

    #[test]
    fn test_percentage_keys_sort_and_relabel() {
        let config = line_chart_config(
            &series(&["Cost of Delay=7.5%", "Cost of Delay=2.5%", "Cost of Delay=5.0%"]),
            "t",
            "y",
        );
        assert_eq!(
            dataset_labels(&config),
            vec!["δ=2.5%", "δ=5.0%", "δ=7.5%"]
        );
    }

    #[test]
    fn test_x_labels_carried_through() {
        let config = line_chart_config(&series(&["V=570k"]), "t", "y");
        assert_eq!(config["data"]["labels"], json!([0.2, 0.3, 0.4]));
        assert_eq!(config["kind"], "line");
    }
}
