//! Growth metrics.

use bizmetrics_core::validation::{
    ensure_finite, ensure_finite_result, ensure_non_negative, ensure_nonzero, ensure_positive,
};
use bizmetrics_core::MetricResult;

/// Calculates the growth rate between two periods as a fraction.
///
/// ```text
/// growth = (current - previous) / previous
/// ```
pub fn growth_rate(previous_value: f64, current_value: f64) -> MetricResult<f64> {
    const METRIC: &str = "growth_rate";
    let previous = ensure_nonzero(METRIC, "previous value", previous_value)?;
    let current = ensure_finite(METRIC, "current value", current_value)?;
    ensure_finite_result(METRIC, (current - previous) / previous)
}

/// Calculates the Compound Annual Growth Rate as a fraction.
///
/// ```text
/// CAGR = (ending / beginning)^(1 / years) - 1
/// ```
///
/// `years` may be fractional. The beginning value and the horizon must be
/// positive; the ending value may be zero (a total loss gives `-1.0`) but not
/// negative, since a negative ratio has no real root.
///
/// # Example
///
/// ```rust
/// use bizmetrics_analytics::growth::cagr;
///
/// let rate = cagr(100.0, 121.0, 2.0).unwrap();
/// assert!((rate - 0.1).abs() < 1e-12);
/// ```
pub fn cagr(beginning_value: f64, ending_value: f64, years: f64) -> MetricResult<f64> {
    const METRIC: &str = "cagr";
    let beginning = ensure_positive(METRIC, "beginning value", beginning_value)?;
    let ending = ensure_non_negative(METRIC, "ending value", ending_value)?;
    let years = ensure_positive(METRIC, "years", years)?;

    if ending == beginning {
        return Ok(0.0);
    }

    ensure_finite_result(METRIC, (ending / beginning).powf(years.recip()) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_growth_rate() {
        assert_relative_eq!(growth_rate(100.0, 110.0).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(growth_rate(200.0, 150.0).unwrap(), -0.25);
        assert!(growth_rate(0.0, 110.0).is_err());
    }

    #[test]
    fn test_growth_rate_negative_base() {
        // Formula is applied as-is; a negative base flips the sign
        assert_relative_eq!(growth_rate(-100.0, -50.0).unwrap(), -0.5);
    }

    #[test]
    fn test_cagr() {
        // Doubling over five years
        assert_abs_diff_eq!(
            cagr(100.0, 200.0, 5.0).unwrap(),
            0.148_698_354_997_035,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(cagr(100.0, 121.0, 2.0).unwrap(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_cagr_flat_is_zero() {
        for years in [0.5, 1.0, 3.0, 40.0] {
            assert_eq!(cagr(250.0, 250.0, years).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_cagr_total_loss() {
        assert_relative_eq!(cagr(100.0, 0.0, 3.0).unwrap(), -1.0);
    }

    #[test]
    fn test_cagr_domain() {
        assert!(cagr(0.0, 100.0, 5.0).is_err());
        assert!(cagr(-10.0, 100.0, 5.0).is_err());
        assert!(cagr(100.0, -1.0, 5.0).is_err());
        assert!(cagr(100.0, 200.0, 0.0).is_err());

        let err = cagr(100.0, 200.0, -2.0).unwrap_err();
        assert!(err.to_string().contains("years must be positive"));
    }
}
