//! Operational metrics: inventory, product delivery, and workforce.

use bizmetrics_core::types::Date;
use bizmetrics_core::validation::{
    count_as_f64, ensure_finite, ensure_finite_result, ensure_nonzero, ensure_positive,
};
use bizmetrics_core::{MetricError, MetricResult};

/// Calculates the inventory turnover ratio.
///
/// ```text
/// turnover = cost of goods sold / average inventory value
/// ```
pub fn inventory_turnover(cost_of_goods_sold: f64, average_inventory: f64) -> MetricResult<f64> {
    const METRIC: &str = "inventory_turnover";
    let cogs = ensure_finite(METRIC, "cost of goods sold", cost_of_goods_sold)?;
    let inventory = ensure_positive(METRIC, "average inventory value", average_inventory)?;
    ensure_finite_result(METRIC, cogs / inventory)
}

/// Calculates time to market in calendar days.
///
/// A launch on the start date is zero days; a launch before the start date
/// is rejected.
///
/// # Example
///
/// ```rust
/// use bizmetrics_analytics::operations::time_to_market;
/// use bizmetrics_core::Date;
///
/// let start = Date::from_ymd(2022, 1, 1).unwrap();
/// let launch = Date::from_ymd(2022, 1, 30).unwrap();
/// assert_eq!(time_to_market(start, launch).unwrap(), 29);
/// ```
pub fn time_to_market(start: Date, launch: Date) -> MetricResult<i64> {
    let days = start.days_between(&launch);
    if days < 0 {
        return Err(MetricError::invalid_input(
            "time_to_market",
            format!("launch date {launch} is before start date {start}"),
        ));
    }
    Ok(days)
}

/// Calculates time to market from two `YYYY-MM-DD` strings.
pub fn time_to_market_from_str(start: &str, launch: &str) -> MetricResult<i64> {
    const METRIC: &str = "time_to_market";
    let start = Date::parse(start).map_err(|e| e.with_metric(METRIC))?;
    let launch = Date::parse(launch).map_err(|e| e.with_metric(METRIC))?;
    time_to_market(start, launch)
}

/// Calculates the employee turnover rate as a fraction.
///
/// The average headcount is a float since it is averaged over the period.
pub fn employee_turnover_rate(leavers: u64, average_employees: f64) -> MetricResult<f64> {
    const METRIC: &str = "employee_turnover_rate";
    let average = ensure_positive(METRIC, "average number of employees", average_employees)?;
    ensure_finite_result(METRIC, count_as_f64(leavers) / average)
}

/// Measures employee productivity as output per unit of input (e.g. per hour).
pub fn employee_productivity(total_output: f64, total_input: f64) -> MetricResult<f64> {
    const METRIC: &str = "employee_productivity";
    let output = ensure_finite(METRIC, "total output", total_output)?;
    let input = ensure_nonzero(METRIC, "total input", total_input)?;
    ensure_finite_result(METRIC, output / input)
}
