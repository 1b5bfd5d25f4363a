//! Coefficient-driven metrics from a marketing-mix regression model.
//!
//! A [`BusinessMetricsCalculator`] holds the fitted coefficients of a model
//! that explains revenue by spend on several variables (TV, search, price,
//! ...). It answers "what does one more unit of spend on X return?" without
//! refitting. The standalone metric functions in the other modules do not
//! need a calculator.

use std::collections::BTreeMap;

use bizmetrics_config::CalculatorConfig;
use bizmetrics_core::report::round_to;
use bizmetrics_core::validation::{ensure_finite, ensure_finite_result, ensure_nonzero};
use bizmetrics_core::{MetricError, MetricResult};
use log::debug;
use rust_decimal::Decimal;

use crate::marketing::price_elasticity;

/// Immutable calculator over a set of regression coefficients.
///
/// Safe to share between threads; every method takes `&self`.
///
/// # Example
///
/// ```rust
/// use bizmetrics_analytics::calculator::BusinessMetricsCalculator;
///
/// let calculator = BusinessMetricsCalculator::new([
///     ("investment_variable", 0.1),
///     ("price", -0.05),
/// ])
/// .unwrap();
///
/// let roi = calculator.investment_roi("investment_variable", 1000.0).unwrap();
/// assert!((roi - 0.1).abs() < 1e-12);
/// assert!((calculator.price_elasticity("price").unwrap() - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessMetricsCalculator {
    coefficients: BTreeMap<String, f64>,
    precision: u32,
}

impl BusinessMetricsCalculator {
    /// Builds a calculator from `(variable, coefficient)` pairs.
    ///
    /// Uses the default reporting precision.
    ///
    /// # Errors
    ///
    /// Fails if any coefficient is not finite.
    pub fn new<I, K>(coefficients: I) -> MetricResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self::build(
            coefficients.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            bizmetrics_config::DEFAULT_PRECISION,
        )
    }

    /// Builds a calculator from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not pass
    /// [`CalculatorConfig::validate`], e.g. a precision above
    /// [`MAX_PRECISION`](bizmetrics_config::MAX_PRECISION) or an empty variable name.
    pub fn from_config(config: &CalculatorConfig) -> MetricResult<Self> {
        config
            .validate()
            .map_err(|e| MetricError::invalid_input("calculator", e.to_string()))?;
        Self::build(config.coefficients.clone(), config.precision)
    }

    fn build(coefficients: BTreeMap<String, f64>, precision: u32) -> MetricResult<Self> {
        for (name, &value) in &coefficients {
            ensure_finite("calculator", &format!("coefficient '{name}'"), value)?;
        }
        debug!(
            "Built metrics calculator with {} coefficient(s): {:?}",
            coefficients.len(),
            coefficients.keys().collect::<Vec<_>>()
        );
        Ok(Self {
            coefficients,
            precision,
        })
    }

    /// Returns the configured variables in sorted order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.coefficients.keys().map(String::as_str)
    }

    /// Returns the reporting precision in decimal places.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Looks up the coefficient for `variable`.
    pub fn coefficient(&self, variable: &str) -> MetricResult<f64> {
        self.coefficients.get(variable).copied().ok_or_else(|| {
            MetricError::invalid_input(
                "coefficient",
                format!("'{variable}' not found in coefficients"),
            )
        })
    }

    /// Revenue increase the model predicts for `investment` in `variable`.
    pub fn predicted_increase(&self, variable: &str, investment: f64) -> MetricResult<f64> {
        const METRIC: &str = "predicted_increase";
        let coefficient = self.coefficient(variable)?;
        let investment = ensure_finite(METRIC, "investment amount", investment)?;
        ensure_finite_result(METRIC, coefficient * investment)
    }

    /// Return on an investment in `variable`, as a fraction.
    ///
    /// ```text
    /// ROI = predicted increase / investment
    /// ```
    pub fn investment_roi(&self, variable: &str, investment: f64) -> MetricResult<f64> {
        const METRIC: &str = "investment_roi";
        let investment = ensure_nonzero(METRIC, "investment amount", investment)?;
        let increase = self.predicted_increase(variable, investment)?;
        ensure_finite_result(METRIC, increase / investment)
    }

    /// Price elasticity of demand for the coefficient stored under `variable`.
    pub fn price_elasticity(&self, variable: &str) -> MetricResult<f64> {
        price_elasticity(self.coefficient(variable)?)
    }

    /// Rounds a metric value to the configured precision.
    pub fn round(&self, value: f64) -> MetricResult<Decimal> {
        round_to(value, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bizmetrics_config::MAX_PRECISION;
    use rust_decimal_macros::dec;

    fn calculator() -> BusinessMetricsCalculator {
        BusinessMetricsCalculator::new([("investment_variable", 0.1), ("price", -0.05)]).unwrap()
    }

    #[test]
    fn test_coefficient_lookup() {
        let calc = calculator();
        assert_relative_eq!(calc.coefficient("price").unwrap(), -0.05);

        let err = calc.coefficient("tv").unwrap_err();
        assert!(err.to_string().contains("'tv' not found"));
    }

    #[test]
    fn test_variables_sorted() {
        let calc = calculator();
        assert_eq!(
            calc.variables().collect::<Vec<_>>(),
            vec!["investment_variable", "price"]
        );
    }

    #[test]
    fn test_predicted_increase() {
        assert_relative_eq!(
            calculator()
                .predicted_increase("investment_variable", 1000.0)
                .unwrap(),
            100.0
        );
    }

    #[test]
    fn test_investment_roi() {
        let calc = calculator();
        assert_relative_eq!(
            calc.investment_roi("investment_variable", 1000.0).unwrap(),
            0.1,
            epsilon = 1e-12
        );
        assert!(calc.investment_roi("investment_variable", 0.0).is_err());
        assert!(calc.investment_roi("missing", 1000.0).is_err());
    }

    #[test]
    fn test_price_elasticity() {
        assert_relative_eq!(calculator().price_elasticity("price").unwrap(), 0.05);
    }

    #[test]
    fn test_rejects_non_finite_coefficient() {
        let err = BusinessMetricsCalculator::new([("price", f64::NAN)]).unwrap_err();
        assert!(err.to_string().contains("coefficient 'price'"));
    }

    #[test]
    fn test_from_config() {
        let config = CalculatorConfig::new()
            .with_coefficient("search", 0.35)
            .with_precision(3);
        let calc = BusinessMetricsCalculator::from_config(&config).unwrap();
        assert_eq!(calc.precision(), 3);
        assert_relative_eq!(calc.coefficient("search").unwrap(), 0.35);
        assert_eq!(calc.round(0.123_456).unwrap(), dec!(0.123));
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = CalculatorConfig::new()
            .with_coefficient("search", 0.35)
            .with_precision(MAX_PRECISION + 1);
        let err = BusinessMetricsCalculator::from_config(&config).unwrap_err();
        assert_eq!(err.metric(), "calculator");
        assert!(err.to_string().contains("precision"));

        let config = CalculatorConfig::new()
            .with_precision(50)
            .with_coefficient(" ", 1.0);
        let err = BusinessMetricsCalculator::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("variable names must not be empty"));

        let config = CalculatorConfig::new()
            .with_coefficient("search", 0.35)
            .with_precision(MAX_PRECISION);
        assert_eq!(
            BusinessMetricsCalculator::from_config(&config)
                .unwrap()
                .precision(),
            MAX_PRECISION
        );
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BusinessMetricsCalculator>();
    }
}
