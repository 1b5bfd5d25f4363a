//! Per-share valuation metrics.

use bizmetrics_core::validation::{
    ensure_finite, ensure_finite_result, ensure_nonzero, ensure_positive,
};
use bizmetrics_core::MetricResult;

/// Calculates Earnings Per Share.
///
/// `shares_outstanding` is a float because it is usually a weighted average
/// over the period. It must be positive.
pub fn earnings_per_share(net_income: f64, shares_outstanding: f64) -> MetricResult<f64> {
    const METRIC: &str = "earnings_per_share";
    let net_income = ensure_finite(METRIC, "net income", net_income)?;
    let shares = ensure_positive(METRIC, "shares outstanding", shares_outstanding)?;
    ensure_finite_result(METRIC, net_income / shares)
}

/// Calculates the Price-to-Earnings ratio.
pub fn price_to_earnings(price_per_share: f64, earnings_per_share: f64) -> MetricResult<f64> {
    const METRIC: &str = "price_to_earnings";
    let price = ensure_finite(METRIC, "price per share", price_per_share)?;
    let eps = ensure_nonzero(METRIC, "earnings per share", earnings_per_share)?;
    ensure_finite_result(METRIC, price / eps)
}
