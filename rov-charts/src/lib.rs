//! Chart.js configuration builders.
//!
//! Each renderer is a pure function from a sensitivity payload to a
//! Chart.js config (`serde_json::Value`). The configs cross the JS bridge
//! as JSON; replacement of a previously drawn chart and function-valued
//! options (tooltip callbacks) live in the JS glue, keyed by the `kind`
//! field each builder sets.

mod line;
mod spider;
mod tornado;

pub use line::line_chart_config;
pub use spider::spider_chart_config;
pub use tornado::tornado_chart_config;

/// Series color palette, one entry per dataset, cycled.
const PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// First numeric token in a series key, used as a display-only sort key.
///
/// Handles magnitude-suffixed keys (`V=570k` -> 570), percentage-style
/// keys (`Cost of Delay=7.5%` -> 7.5), and a leading minus sign
/// (`δ=-2.5%` -> -2.5). Keys without a numeric token sort last.
fn first_numeric_token(key: &str) -> f64 {
    let bytes = key.as_bytes();
    let mut start = match bytes.iter().position(|b| b.is_ascii_digit()) {
        Some(i) => i,
        None => return f64::INFINITY,
    };
    if start > 0 && bytes[start - 1] == b'-' {
        start -= 1;
    }
    let mut end = start;
    if bytes[end] == b'-' {
        end += 1;
    }
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    key[start..end].parse().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_numeric_token() {
        assert_eq!(first_numeric_token("V=570k"), 570.0);
        assert_eq!(first_numeric_token("Cost of Delay=7.5%"), 7.5);
        assert_eq!(first_numeric_token("12.25"), 12.25);
        assert!(first_numeric_token("no digits").is_infinite());
    }

    #[test]
    fn test_first_numeric_token_keeps_sign() {
        assert_eq!(first_numeric_token("Cost of Delay=-2.5%"), -2.5);
        // A negative token sorts below every positive one.
        assert!(first_numeric_token("δ=-2.5%") < first_numeric_token("δ=2.5%"));
    }
}
