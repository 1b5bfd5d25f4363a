//! Liquidity and solvency metrics read off the balance sheet.
//!
//! ```text
//! Current Ratio   = current assets / current liabilities
//! Quick Ratio     = (cash + accounts receivable) / current liabilities
//! Working Capital = current assets - current liabilities
//! Debt-to-Equity  = total debt / shareholders' equity
//! ```

use bizmetrics_core::validation::{ensure_finite, ensure_finite_result, ensure_nonzero};
use bizmetrics_core::MetricResult;

/// Calculates the current ratio.
pub fn current_ratio(current_assets: f64, current_liabilities: f64) -> MetricResult<f64> {
    const METRIC: &str = "current_ratio";
    let assets = ensure_finite(METRIC, "current assets", current_assets)?;
    let liabilities = ensure_nonzero(METRIC, "current liabilities", current_liabilities)?;
    ensure_finite_result(METRIC, assets / liabilities)
}

/// Calculates the quick (acid-test) ratio.
///
/// Inventory is excluded; only cash and receivables count as quick assets.
pub fn quick_ratio(
    cash: f64,
    accounts_receivable: f64,
    current_liabilities: f64,
) -> MetricResult<f64> {
    const METRIC: &str = "quick_ratio";
    let cash = ensure_finite(METRIC, "cash", cash)?;
    let receivables = ensure_finite(METRIC, "accounts receivable", accounts_receivable)?;
    let liabilities = ensure_nonzero(METRIC, "current liabilities", current_liabilities)?;
    ensure_finite_result(METRIC, (cash + receivables) / liabilities)
}

/// Calculates working capital.
pub fn working_capital(current_assets: f64, current_liabilities: f64) -> MetricResult<f64> {
    const METRIC: &str = "working_capital";
    let assets = ensure_finite(METRIC, "current assets", current_assets)?;
    let liabilities = ensure_finite(METRIC, "current liabilities", current_liabilities)?;
    ensure_finite_result(METRIC, assets - liabilities)
}

/// Calculates the debt-to-equity ratio.
pub fn debt_to_equity(total_debt: f64, shareholders_equity: f64) -> MetricResult<f64> {
    const METRIC: &str = "debt_to_equity";
    let debt = ensure_finite(METRIC, "total debt", total_debt)?;
    let equity = ensure_nonzero(METRIC, "shareholders' equity", shareholders_equity)?;
    ensure_finite_result(METRIC, debt / equity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_current_ratio() {
        assert_relative_eq!(current_ratio(100.0, 50.0).unwrap(), 2.0);
        let err = current_ratio(100.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("current liabilities cannot be zero"));
    }

    #[test]
    fn test_quick_ratio() {
        assert_relative_eq!(quick_ratio(300.0, 200.0, 400.0).unwrap(), 1.25);
        assert!(quick_ratio(300.0, 200.0, 0.0).is_err());
    }

    #[test]
    fn test_working_capital() {
        assert_relative_eq!(working_capital(100.0, 50.0).unwrap(), 50.0);
        assert_relative_eq!(working_capital(50.0, 100.0).unwrap(), -50.0);
    }

    #[test]
    fn test_debt_to_equity() {
        assert_relative_eq!(debt_to_equity(50.0, 5000.0).unwrap(), 0.01);
        assert!(debt_to_equity(50.0, 0.0).is_err());
        // Negative equity (accumulated deficit) yields a negative ratio
        assert_relative_eq!(debt_to_equity(100.0, -50.0).unwrap(), -2.0);
    }
}
