//! Input validation shared by all metrics.
//!
//! Each helper checks one precondition and returns the validated value, so a
//! metric reads as a short list of `?`-terminated checks followed by its
//! formula. All `f64` helpers reject `NaN` and infinities first.

use crate::error::{MetricError, MetricResult};

/// Rejects `NaN` and infinite inputs.
pub fn ensure_finite(metric: &'static str, field: &str, value: f64) -> MetricResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MetricError::invalid_input(
            metric,
            format!("{field} must be a finite number, got {value}"),
        ))
    }
}

/// Rejects a zero (or non-finite) denominator.
pub fn ensure_nonzero(metric: &'static str, field: &str, value: f64) -> MetricResult<f64> {
    let value = ensure_finite(metric, field, value)?;
    if value == 0.0 {
        return Err(MetricError::zero_denominator(metric, field));
    }
    Ok(value)
}

/// Requires a strictly positive value.
pub fn ensure_positive(metric: &'static str, field: &str, value: f64) -> MetricResult<f64> {
    let value = ensure_finite(metric, field, value)?;
    if value <= 0.0 {
        return Err(MetricError::invalid_input(
            metric,
            format!("{field} must be positive, got {value}"),
        ));
    }
    Ok(value)
}

/// Requires a value of zero or more.
pub fn ensure_non_negative(metric: &'static str, field: &str, value: f64) -> MetricResult<f64> {
    let value = ensure_finite(metric, field, value)?;
    if value < 0.0 {
        return Err(MetricError::invalid_input(
            metric,
            format!("{field} cannot be negative, got {value}"),
        ));
    }
    Ok(value)
}

/// Rejects a zero head count used as a denominator and widens it to `f64`.
pub fn ensure_nonzero_count(metric: &'static str, field: &str, count: u64) -> MetricResult<f64> {
    if count == 0 {
        return Err(MetricError::zero_denominator(metric, field));
    }
    Ok(count_as_f64(count))
}

/// Widens a head count to `f64`.
///
/// Counts above 2^53 lose precision, far beyond any realistic customer base.
pub fn count_as_f64(count: u64) -> f64 {
    count as f64
}

/// Rejects a computed value that overflowed to infinity or became `NaN`.
pub fn ensure_finite_result(metric: &'static str, value: f64) -> MetricResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MetricError::invalid_input(
            metric,
            format!("result is not a finite number ({value}); inputs are out of range"),
        ))
    }
}
