//! Cash flow metrics.
//!
//! Cash flows are ordered by period. Index 0 is the present (typically the
//! negative initial investment) and is not discounted.

use bizmetrics_core::validation::{ensure_finite, ensure_finite_result, ensure_positive};
use bizmetrics_core::{MetricError, MetricResult};

/// Calculates the Net Present Value of a series of periodic cash flows.
///
/// ```text
/// NPV = Σ cash_flows[t] / (1 + rate)^t,  t = 0..n
/// ```
///
/// # Arguments
///
/// * `cash_flows` - Cash flows per period, starting at `t = 0`
/// * `rate` - Discount rate per period as a fraction (0.1 for 10%)
///
/// # Errors
///
/// Fails when `cash_flows` is empty, when any flow is not finite, or when
/// `rate <= -1` (the discount factor is undefined).
///
/// # Example
///
/// ```rust
/// use bizmetrics_analytics::cashflows::npv;
///
/// let value = npv(&[-1000.0, 300.0, 300.0, 300.0, 300.0], 0.1).unwrap();
/// assert!((value - (-49.04)).abs() < 0.01);
/// ```
pub fn npv(cash_flows: &[f64], rate: f64) -> MetricResult<f64> {
    const METRIC: &str = "npv";
    if cash_flows.is_empty() {
        return Err(MetricError::invalid_input(
            METRIC,
            "cash flows must not be empty",
        ));
    }
    let rate = ensure_finite(METRIC, "rate", rate)?;
    if rate <= -1.0 {
        return Err(MetricError::invalid_input(
            METRIC,
            format!("rate must be greater than -1, got {rate}"),
        ));
    }

    let growth = 1.0 + rate;
    let mut discount = 1.0;
    let mut total = 0.0;
    for &flow in cash_flows {
        total += ensure_finite(METRIC, "cash flow", flow)? / discount;
        discount *= growth;
    }

    ensure_finite_result(METRIC, total)
}

/// Calculates the payback period in whole periods.
///
/// Returns the first 1-based period in which cumulative inflows reach the
/// initial investment, or `None` if the inflows never recover it. Inflows may
/// be negative (a later outlay pushes recovery back).
///
/// # Arguments
///
/// * `initial_investment` - Amount invested up front (positive)
/// * `cash_inflows` - Net inflow for each period after the investment
pub fn payback_period(initial_investment: f64, cash_inflows: &[f64]) -> MetricResult<Option<usize>> {
    const METRIC: &str = "payback_period";
    let investment = ensure_positive(METRIC, "initial investment", initial_investment)?;
    if cash_inflows.is_empty() {
        return Err(MetricError::invalid_input(
            METRIC,
            "cash inflows must not be empty",
        ));
    }

    let mut cumulative = 0.0;
    for (index, &inflow) in cash_inflows.iter().enumerate() {
        cumulative += ensure_finite(METRIC, "cash inflow", inflow)?;
        if cumulative >= investment {
            return Ok(Some(index + 1));
        }
    }

    Ok(None)
}
