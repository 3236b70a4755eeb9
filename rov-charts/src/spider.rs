//! Spider/radar chart: relative sensitivity percentage per parameter.

use serde_json::{json, Value};
use std::collections::HashMap;

/// Build a radar config, one axis per parameter.
///
/// The radial scale runs from 0 to a suggested maximum of 1.2x the largest
/// value present. Axes are sorted by name for a stable layout.
pub fn spider_chart_config(spider: &HashMap<String, f64>, title: &str) -> Value {
    let mut axes: Vec<(&String, f64)> = spider.iter().map(|(k, v)| (k, *v)).collect();
    axes.sort_by(|a, b| a.0.cmp(b.0));

    let labels: Vec<&str> = axes.iter().map(|(name, _)| name.as_str()).collect();
    let values: Vec<f64> = axes.iter().map(|(_, v)| *v).collect();
    let suggested_max = values.iter().cloned().fold(0.0, f64::max) * 1.2;

    json!({
        "kind": "spider",
        "type": "radar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Relative sensitivity (%)",
                "data": values,
                "borderColor": "#1f77b4",
                "backgroundColor": "rgba(31, 119, 180, 0.2)",
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": { "display": true, "text": title },
            },
            "scales": {
                "r": {
                    "min": 0,
                    "suggestedMax": suggested_max,
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_scale_headroom() {
        let mut spider = HashMap::new();
        spider.insert("Volatility".to_string(), 50.0);
        spider.insert("Asset Value (V)".to_string(), 20.0);

        let config = spider_chart_config(&spider, "Spider");
        assert_eq!(config["options"]["scales"]["r"]["min"], 0);
        assert_eq!(config["options"]["scales"]["r"]["suggestedMax"], 60.0);
    }

    #[test]
    fn test_axes_sorted_by_name() {
        let mut spider = HashMap::new();
        spider.insert("Volatility".to_string(), 1.0);
        spider.insert("Asset Value (V)".to_string(), 2.0);
        spider.insert("Cost of Delay".to_string(), 3.0);

        let config = spider_chart_config(&spider, "Spider");
        assert_eq!(
            config["data"]["labels"],
            json!(["Asset Value (V)", "Cost of Delay", "Volatility"])
        );
        assert_eq!(config["data"]["datasets"][0]["data"], json!([2.0, 3.0, 1.0]));
    }
}
