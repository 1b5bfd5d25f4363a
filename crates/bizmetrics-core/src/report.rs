//! Presentation helpers for metric results.
//!
//! Metrics return raw `f64` fractions. Rounding and percent scaling happen
//! only when a caller asks for them, never inside a metric.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{MetricError, MetricResult};

/// Rounds a metric value to `decimal_places`, half away from zero.
///
/// The result is a [`Decimal`] so that the rounded digits survive printing
/// and comparison exactly.
///
/// # Example
///
/// ```rust
/// use bizmetrics_core::report::round_to;
/// use rust_decimal::Decimal;
///
/// let rounded = round_to(-49.040366, 2).unwrap();
/// assert_eq!(rounded, Decimal::new(-4904, 2));
/// ```
pub fn round_to(value: f64, decimal_places: u32) -> MetricResult<Decimal> {
    let decimal = Decimal::from_f64_retain(value).ok_or_else(|| {
        MetricError::invalid_input(
            "round_to",
            format!("{value} cannot be represented as a decimal"),
        )
    })?;
    Ok(decimal.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero))
}

/// Converts a fraction (`0.25`) to a percentage (`25.0`).
pub fn to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}
