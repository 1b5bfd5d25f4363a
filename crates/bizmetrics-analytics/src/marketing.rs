//! Marketing funnel and pricing metrics.

use bizmetrics_core::validation::{
    count_as_f64, ensure_finite, ensure_finite_result, ensure_nonzero_count,
};
use bizmetrics_core::{MetricError, MetricResult};

/// Calculates the visitor conversion rate as a fraction.
///
/// Conversions are not capped by visitors: one visitor may convert more than
/// once (repeat purchases), so rates above 1.0 are valid.
pub fn conversion_rate(conversions: u64, visitors: u64) -> MetricResult<f64> {
    const METRIC: &str = "conversion_rate";
    let visitors = ensure_nonzero_count(METRIC, "total visitors", visitors)?;
    Ok(count_as_f64(conversions) / visitors)
}

/// Calculates the lead conversion rate as a fraction.
///
/// Unlike [`conversion_rate`], a lead converts at most once, so converted
/// leads may not exceed total leads.
pub fn lead_conversion_rate(leads_converted: u64, total_leads: u64) -> MetricResult<f64> {
    const METRIC: &str = "lead_conversion_rate";
    let total = ensure_nonzero_count(METRIC, "total leads", total_leads)?;
    if leads_converted > total_leads {
        return Err(MetricError::invalid_input(
            METRIC,
            format!("leads converted ({leads_converted}) exceeds total leads ({total_leads})"),
        ));
    }
    Ok(count_as_f64(leads_converted) / total)
}

/// Calculates Cost Per Lead.
pub fn cost_per_lead(marketing_expenses: f64, total_leads: u64) -> MetricResult<f64> {
    const METRIC: &str = "cost_per_lead";
    let expenses = ensure_finite(METRIC, "marketing expenses", marketing_expenses)?;
    let leads = ensure_nonzero_count(METRIC, "total leads", total_leads)?;
    ensure_finite_result(METRIC, expenses / leads)
}

/// Price elasticity of demand from a regression price coefficient.
///
/// Elasticity is reported as a magnitude, so the sign of the coefficient
/// (normally negative) is dropped.
pub fn price_elasticity(price_coefficient: f64) -> MetricResult<f64> {
    let coefficient = ensure_finite("price_elasticity", "price coefficient", price_coefficient)?;
    Ok(coefficient.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversion_rate() {
        assert_relative_eq!(conversion_rate(100, 1000).unwrap(), 0.1);
        assert_relative_eq!(conversion_rate(15, 10).unwrap(), 1.5);
        assert!(conversion_rate(100, 0).is_err());
    }

    #[test]
    fn test_lead_conversion_rate() {
        assert_relative_eq!(lead_conversion_rate(100, 1000).unwrap(), 0.1);
        assert_eq!(lead_conversion_rate(0, 1000).unwrap(), 0.0);
        assert!(lead_conversion_rate(100, 0).is_err());
        assert!(lead_conversion_rate(1001, 1000).is_err());
    }

    #[test]
    fn test_cost_per_lead() {
        assert_relative_eq!(cost_per_lead(1000.0, 100).unwrap(), 10.0);
        let err = cost_per_lead(1000.0, 0).unwrap_err();
        assert!(err.to_string().contains("total leads cannot be zero"));
    }

    #[test]
    fn test_price_elasticity() {
        assert_relative_eq!(price_elasticity(-0.05).unwrap(), 0.05);
        assert_relative_eq!(price_elasticity(1.2).unwrap(), 1.2);
        assert!(price_elasticity(f64::NAN).is_err());
    }
}
