//! Zero-contribution rule for optional catalog fields
//!
//! Brix targets, harvest days and hardiness bounds are nullable in the catalog.
//! Every additive scoring term goes through these helpers so that a missing
//! value contributes exactly 0.0 and never disqualifies a crop.

/// Score contribution of an optional value: `term(value)` when present, else 0.0.
pub fn contribution<T: Copy>(value: Option<T>, term: impl FnOnce(T) -> f64) -> f64 {
    value.map_or(0.0, term)
}

/// Fixed `bonus` when the value is present and satisfies `pred`, else 0.0.
pub fn flag_contribution<T: Copy>(value: Option<T>, bonus: f64, pred: impl FnOnce(T) -> bool) -> f64 {
    contribution(value, |v| if pred(v) { bonus } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_missing_value_contributes_zero() {
        assert_relative_eq!(contribution(None::<f64>, |v| v * 100.0), 0.0);
        assert_relative_eq!(flag_contribution(None::<u32>, 5.0, |_| true), 0.0);
    }

    #[test]
    fn test_present_value_applies_term() {
        assert_relative_eq!(contribution(Some(2.5), |v| v * 2.0), 5.0);
        assert_relative_eq!(flag_contribution(Some(12.0), 3.0, |v| v >= 12.0), 3.0);
        assert_relative_eq!(flag_contribution(Some(11.9), 3.0, |v| v >= 12.0), 0.0);
    }
}
