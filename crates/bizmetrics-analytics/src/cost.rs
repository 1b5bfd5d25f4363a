//! Cost structure metrics.

use bizmetrics_core::validation::{
    ensure_finite, ensure_finite_result, ensure_non_negative, ensure_nonzero,
};
use bizmetrics_core::{MetricError, MetricResult};

/// Calculates the breakeven point in units sold.
///
/// ```text
/// units = fixed costs / (price per unit - variable cost per unit)
/// ```
///
/// A unit must earn a positive contribution, so `price_per_unit` has to
/// exceed `variable_cost_per_unit`; otherwise no sales volume ever breaks even.
///
/// # Example
///
/// ```rust
/// use bizmetrics_analytics::cost::breakeven_point;
///
/// assert_eq!(breakeven_point(10_000.0, 50.0, 30.0).unwrap(), 500.0);
/// assert!(breakeven_point(10_000.0, 30.0, 30.0).is_err());
/// ```
pub fn breakeven_point(
    fixed_costs: f64,
    price_per_unit: f64,
    variable_cost_per_unit: f64,
) -> MetricResult<f64> {
    const METRIC: &str = "breakeven_point";
    let fixed = ensure_non_negative(METRIC, "fixed costs", fixed_costs)?;
    let price = ensure_finite(METRIC, "price per unit", price_per_unit)?;
    let variable = ensure_finite(METRIC, "variable cost per unit", variable_cost_per_unit)?;

    let contribution = price - variable;
    if contribution <= 0.0 {
        return Err(MetricError::invalid_input(
            METRIC,
            format!(
                "price per unit ({price}) must exceed variable cost per unit ({variable})"
            ),
        ));
    }

    ensure_finite_result(METRIC, fixed / contribution)
}

/// Calculates the degree of operating leverage.
///
/// ```text
/// DOL = contribution margin / net operating income
/// ```
pub fn operating_leverage(contribution_margin: f64, net_operating_income: f64) -> MetricResult<f64> {
    const METRIC: &str = "operating_leverage";
    let contribution = ensure_finite(METRIC, "contribution margin", contribution_margin)?;
    let income = ensure_nonzero(METRIC, "net operating income", net_operating_income)?;
    ensure_finite_result(METRIC, contribution / income)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_breakeven_point() {
        assert_relative_eq!(breakeven_point(10_000.0, 50.0, 30.0).unwrap(), 500.0);
        assert_relative_eq!(breakeven_point(1000.0, 50.0, 10.0).unwrap(), 25.0);
        assert_eq!(breakeven_point(0.0, 50.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_breakeven_no_contribution() {
        let err = breakeven_point(10_000.0, 30.0, 30.0).unwrap_err();
        assert!(err.to_string().contains("must exceed variable cost"));
        assert!(breakeven_point(10_000.0, 20.0, 30.0).is_err());
    }

    #[test]
    fn test_breakeven_negative_fixed_costs() {
        assert!(breakeven_point(-1.0, 50.0, 30.0).is_err());
    }

    #[test]
    fn test_operating_leverage() {
        assert_relative_eq!(operating_leverage(50_000.0, 10_000.0).unwrap(), 5.0);
        assert!(operating_leverage(50_000.0, 0.0).is_err());
    }
}
