//! Profitability metrics.
//!
//! ## Formulas
//!
//! ```text
//! ROI                 = (gain - cost) / cost
//! Margin              = (revenue - cost) / revenue
//! Gross Profit Margin = gross profit / revenue
//! EBIT                = revenue - operating expenses
//! ROA                 = net income / total assets
//! ROE                 = net income / shareholders' equity
//! ```

use bizmetrics_core::validation::{ensure_finite, ensure_finite_result, ensure_nonzero};
use bizmetrics_core::MetricResult;

/// Calculates Return on Investment as a fraction.
///
/// # Arguments
///
/// * `gain` - Total value returned by the investment
/// * `cost` - Cost of the investment
///
/// # Example
///
/// ```rust
/// use bizmetrics_analytics::profitability::roi;
///
/// assert_eq!(roi(150.0, 100.0).unwrap(), 0.5);
/// assert!(roi(10.0, 0.0).is_err());
/// ```
pub fn roi(gain: f64, cost: f64) -> MetricResult<f64> {
    const METRIC: &str = "roi";
    let gain = ensure_finite(METRIC, "gain", gain)?;
    let cost = ensure_nonzero(METRIC, "cost", cost)?;
    ensure_finite_result(METRIC, (gain - cost) / cost)
}

/// Calculates the net margin as a fraction of revenue.
///
/// # Arguments
///
/// * `revenue` - Total revenue
/// * `cost` - Total cost
pub fn margin(revenue: f64, cost: f64) -> MetricResult<f64> {
    const METRIC: &str = "margin";
    let revenue = ensure_nonzero(METRIC, "revenue", revenue)?;
    let cost = ensure_finite(METRIC, "cost", cost)?;
    ensure_finite_result(METRIC, (revenue - cost) / revenue)
}

/// Calculates the gross profit margin as a fraction of revenue.
pub fn gross_profit_margin(gross_profit: f64, revenue: f64) -> MetricResult<f64> {
    const METRIC: &str = "gross_profit_margin";
    let gross_profit = ensure_finite(METRIC, "gross profit", gross_profit)?;
    let revenue = ensure_nonzero(METRIC, "revenue", revenue)?;
    ensure_finite_result(METRIC, gross_profit / revenue)
}

/// Calculates Earnings Before Interest and Taxes.
///
/// Only non-finite inputs are rejected; EBIT may be negative.
pub fn ebit(revenue: f64, operating_expenses: f64) -> MetricResult<f64> {
    const METRIC: &str = "ebit";
    let revenue = ensure_finite(METRIC, "revenue", revenue)?;
    let operating_expenses = ensure_finite(METRIC, "operating expenses", operating_expenses)?;
    ensure_finite_result(METRIC, revenue - operating_expenses)
}

/// Calculates Return on Assets as a fraction.
pub fn return_on_assets(net_income: f64, total_assets: f64) -> MetricResult<f64> {
    const METRIC: &str = "return_on_assets";
    let net_income = ensure_finite(METRIC, "net income", net_income)?;
    let total_assets = ensure_nonzero(METRIC, "total assets", total_assets)?;
    ensure_finite_result(METRIC, net_income / total_assets)
}

/// Calculates Return on Equity as a fraction.
pub fn return_on_equity(net_income: f64, shareholders_equity: f64) -> MetricResult<f64> {
    const METRIC: &str = "return_on_equity";
    let net_income = ensure_finite(METRIC, "net income", net_income)?;
    let equity = ensure_nonzero(METRIC, "shareholders' equity", shareholders_equity)?;
    ensure_finite_result(METRIC, net_income / equity)
}
