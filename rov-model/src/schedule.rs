//! Manual cost-of-delay schedule.
//!
//! One δ value per discrete period `0..=N` where `N = round(T)`. The final
//! entry is fixed at 1.0 by convention (full value at maturity) and is never
//! user-editable. The schedule lives for the page session only and is reset
//! whenever the maturity-time field changes, since the period count it was
//! built for is no longer valid.

use crate::ValidationError;

/// Derive the discrete period count from a maturity-time field value.
///
/// Returns `round(T)` floored at 1 for any positive `T`, `None` otherwise.
pub fn period_count(maturity_time: &str) -> Option<u32> {
    let t: f64 = maturity_time.trim().parse().ok()?;
    if t > 0.0 {
        Some((t.round() as u32).max(1))
    } else {
        None
    }
}

/// Ordered per-period δ values, index = period.
///
/// Invariant: when non-empty, the last entry is exactly 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaSchedule {
    values: Vec<f64>,
}

impl DeltaSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Stored value for a period, if the schedule covers it.
    pub fn get(&self, period: usize) -> Option<f64> {
        self.values.get(period).copied()
    }

    /// Discard all stored values. Called when the maturity time changes.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Draft strings for the editor's inputs, periods `0..=n`.
    ///
    /// Period `n` is pre-filled with "1.0"; every other period defaults to
    /// the previously stored value or 0.0.
    pub fn draft_entries(&self, n: u32) -> Vec<String> {
        (0..=n as usize)
            .map(|period| {
                if period == n as usize {
                    "1.0".to_string()
                } else {
                    self.get(period).unwrap_or(0.0).to_string()
                }
            })
            .collect()
    }

    /// Validate editor drafts and replace the stored schedule atomically.
    ///
    /// Every non-final entry must parse as a number >= 0; the first failure
    /// rejects the whole save and leaves stored state untouched. The final
    /// entry is forced to 1.0 regardless of the (disabled) field's content.
    pub fn commit(&mut self, drafts: &[String]) -> Result<(), ValidationError> {
        let last = drafts.len().saturating_sub(1);
        let mut next = Vec::with_capacity(drafts.len());
        for (period, draft) in drafts.iter().enumerate() {
            if period == last {
                next.push(1.0);
                continue;
            }
            match draft.trim().parse::<f64>() {
                Ok(v) if v >= 0.0 => next.push(v),
                _ => return Err(ValidationError::BadScheduleValue { period }),
            }
        }
        self.values = next;
        Ok(())
    }

    /// Comma-joined δ values for periods `0..n`, as sent on the wire.
    ///
    /// The fixed final 1.0 entry is excluded; the backend infers it.
    pub fn leading_csv(&self, n: u32) -> String {
        self.values
            .iter()
            .take(n as usize)
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_count() {
        assert_eq!(period_count("3"), Some(3));
        assert_eq!(period_count("2.4"), Some(2));
        assert_eq!(period_count("2.5"), Some(3));
        assert_eq!(period_count("0.2"), Some(1)); // rounds to 0, floored at 1
        assert_eq!(period_count("0"), None);
        assert_eq!(period_count("-1"), None);
        assert_eq!(period_count("abc"), None);
        assert_eq!(period_count(""), None);
    }

    #[test]
    fn test_draft_entries_shape() {
        let schedule = DeltaSchedule::new();
        // N = 3 -> periods 0..=3, last fixed at 1.0
        let drafts = schedule.draft_entries(3);
        assert_eq!(drafts.len(), 4);
        assert_eq!(drafts[0], "0");
        assert_eq!(drafts[3], "1.0");
    }

    #[test]
    fn test_draft_entries_keep_stored_values() {
        let mut schedule = DeltaSchedule::new();
        schedule
            .commit(&["0.02".into(), "0.04".into(), "1.0".into()])
            .unwrap();
        let drafts = schedule.draft_entries(2);
        assert_eq!(drafts, vec!["0.02", "0.04", "1.0"]);
    }

    #[test]
    fn test_commit_forces_final_to_one() {
        let mut schedule = DeltaSchedule::new();
        schedule
            .commit(&["0.05".into(), "0.07".into(), "0.3".into()])
            .unwrap();
        assert_eq!(schedule.get(2), Some(1.0));
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_commit_rejects_negative_and_keeps_prior_state() {
        let mut schedule = DeltaSchedule::new();
        schedule
            .commit(&["0.02".into(), "0.04".into(), "1.0".into()])
            .unwrap();
        let before = schedule.clone();

        let err = schedule
            .commit(&["0.1".into(), "-0.5".into(), "1.0".into()])
            .unwrap_err();
        assert_eq!(err, ValidationError::BadScheduleValue { period: 1 });
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_commit_rejects_non_numeric() {
        let mut schedule = DeltaSchedule::new();
        let err = schedule
            .commit(&["0.1".into(), "oops".into(), "1.0".into()])
            .unwrap_err();
        assert_eq!(err, ValidationError::BadScheduleValue { period: 1 });
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_leading_csv_excludes_final_entry() {
        let mut schedule = DeltaSchedule::new();
        schedule
            .commit(&["0.02".into(), "0.04".into(), "1.0".into()])
            .unwrap();
        // N = 2 -> exactly 2 comma-separated values, no trailing 1.0
        assert_eq!(schedule.leading_csv(2), "0.02,0.04");
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut schedule = DeltaSchedule::new();
        schedule.commit(&["0.1".into(), "1.0".into()]).unwrap();
        schedule.reset();
        assert!(schedule.is_empty());
    }
}
