//! Customer economics.
//!
//! Head counts (customers, orders, survey respondents) are `u64`, so a
//! negative count cannot be expressed; a zero count used as a denominator is
//! still rejected at runtime.

use bizmetrics_core::validation::{
    count_as_f64, ensure_finite, ensure_finite_result, ensure_non_negative, ensure_nonzero,
    ensure_nonzero_count,
};
use bizmetrics_core::{MetricError, MetricResult};

/// Calculates Customer Lifetime Value.
///
/// ```text
/// CLTV = average purchase value × purchase frequency × customer lifetime × profit margin
/// ```
///
/// # Arguments
///
/// * `average_purchase_value` - Average value of one purchase
/// * `purchase_frequency` - Purchases per period
/// * `customer_lifetime` - Expected relationship length in periods
/// * `profit_margin` - Profit margin as a fraction in `[0, 1]`
pub fn customer_lifetime_value(
    average_purchase_value: f64,
    purchase_frequency: f64,
    customer_lifetime: f64,
    profit_margin: f64,
) -> MetricResult<f64> {
    const METRIC: &str = "customer_lifetime_value";
    let value = ensure_non_negative(METRIC, "average purchase value", average_purchase_value)?;
    let frequency = ensure_non_negative(METRIC, "purchase frequency", purchase_frequency)?;
    let lifetime = ensure_non_negative(METRIC, "customer lifetime", customer_lifetime)?;
    let margin = ensure_finite(METRIC, "profit margin", profit_margin)?;
    if !(0.0..=1.0).contains(&margin) {
        return Err(MetricError::invalid_input(
            METRIC,
            format!("profit margin must be between 0 and 1, got {margin}"),
        ));
    }

    ensure_finite_result(METRIC, value * frequency * lifetime * margin)
}

/// Calculates Customer Acquisition Cost.
pub fn customer_acquisition_cost(marketing_expenses: f64, new_customers: u64) -> MetricResult<f64> {
    const METRIC: &str = "customer_acquisition_cost";
    let expenses = ensure_finite(METRIC, "marketing expenses", marketing_expenses)?;
    let customers = ensure_nonzero_count(METRIC, "new customers", new_customers)?;
    ensure_finite_result(METRIC, expenses / customers)
}

/// Calculates the churn rate as a fraction of the starting customer base.
///
/// Customers lost cannot exceed customers at the start of the period.
///
/// # Example
///
/// ```rust
/// use bizmetrics_analytics::customer::churn_rate;
///
/// assert_eq!(churn_rate(50, 500).unwrap(), 0.1);
/// assert_eq!(churn_rate(0, 500).unwrap(), 0.0);
/// assert!(churn_rate(5, 0).is_err());
/// ```
pub fn churn_rate(customers_lost: u64, customers_start: u64) -> MetricResult<f64> {
    const METRIC: &str = "churn_rate";
    let start = ensure_nonzero_count(METRIC, "customers at start", customers_start)?;
    if customers_lost > customers_start {
        return Err(MetricError::invalid_input(
            METRIC,
            format!(
                "customers lost ({customers_lost}) exceeds customers at start ({customers_start})"
            ),
        ));
    }
    Ok(count_as_f64(customers_lost) / start)
}

/// Calculates the customer retention rate as a fraction.
///
/// ```text
/// retention = (customers at end - new customers) / customers at start
/// ```
///
/// New customers cannot exceed customers at the end of the period. The rate
/// can exceed 1.0 when the start count was understated; that is reported,
/// not rejected.
pub fn retention_rate(
    customers_end: u64,
    new_customers: u64,
    customers_start: u64,
) -> MetricResult<f64> {
    const METRIC: &str = "retention_rate";
    let start = ensure_nonzero_count(METRIC, "customers at start", customers_start)?;
    let retained = customers_end.checked_sub(new_customers).ok_or_else(|| {
        MetricError::invalid_input(
            METRIC,
            format!("new customers ({new_customers}) exceeds customers at end ({customers_end})"),
        )
    })?;
    Ok(count_as_f64(retained) / start)
}

/// Calculates the LTV to CAC ratio.
pub fn ltv_to_cac(lifetime_value: f64, acquisition_cost: f64) -> MetricResult<f64> {
    const METRIC: &str = "ltv_to_cac";
    let ltv = ensure_finite(METRIC, "lifetime value", lifetime_value)?;
    let cac = ensure_nonzero(METRIC, "customer acquisition cost", acquisition_cost)?;
    ensure_finite_result(METRIC, ltv / cac)
}

/// Calculates Average Order Value.
pub fn average_order_value(total_revenue: f64, orders: u64) -> MetricResult<f64> {
    const METRIC: &str = "average_order_value";
    let revenue = ensure_finite(METRIC, "total revenue", total_revenue)?;
    let orders = ensure_nonzero_count(METRIC, "number of orders", orders)?;
    ensure_finite_result(METRIC, revenue / orders)
}

/// Calculates Net Promoter Score on the conventional `-100..=100` scale.
///
/// ```text
/// NPS = (promoters - detractors) / (promoters + passives + detractors) × 100
/// ```
pub fn net_promoter_score(promoters: u64, passives: u64, detractors: u64) -> MetricResult<f64> {
    const METRIC: &str = "net_promoter_score";
    let total = promoters
        .checked_add(passives)
        .and_then(|sum| sum.checked_add(detractors))
        .ok_or_else(|| MetricError::invalid_input(METRIC, "respondent count overflows"))?;
    let total = ensure_nonzero_count(METRIC, "total respondents", total)?;

    let net = count_as_f64(promoters) - count_as_f64(detractors);
    Ok(net / total * 100.0)
}
