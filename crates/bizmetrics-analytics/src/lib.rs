//! # BizMetrics Analytics
//!
//! Standalone functions for business and financial metrics.
//!
//! Every metric is a pure function of its inputs: no I/O, no logging, no
//! shared state. Functions may be called concurrently from any number of
//! threads. Inputs outside a formula's domain (a zero denominator, a
//! non-positive horizon, a non-finite number) produce
//! [`MetricError::InvalidInput`](bizmetrics_core::MetricError) rather than
//! `inf` or `NaN`.
//!
//! Rates are returned as fractions (`0.25` for 25%). Net Promoter Score is
//! the exception and uses its conventional `-100..=100` scale.
//!
//! - **Profitability**: ROI, margin, gross profit margin, EBIT, ROA, ROE
//! - **Growth**: period growth rate, CAGR
//! - **Cash flows**: NPV, payback period
//! - **Cost structure**: breakeven point, operating leverage
//! - **Balance sheet**: current ratio, quick ratio, working capital, debt-to-equity
//! - **Valuation**: EPS, P/E ratio
//! - **Customers**: CLTV, CAC, churn, retention, LTV/CAC, AOV, NPS
//! - **Marketing**: conversion rate, lead conversion rate, CPL, price elasticity
//! - **Operations**: inventory turnover, time to market, employee turnover and productivity
//! - **Calculator**: coefficient-driven ROI and elasticity from a marketing-mix model
//!
//! ## Usage
//!
//! ```rust
//! use bizmetrics_analytics::prelude::*;
//!
//! let roi = roi(150.0, 100.0).unwrap();
//! assert!((roi - 0.5).abs() < 1e-12);
//!
//! let units = breakeven_point(10_000.0, 50.0, 30.0).unwrap();
//! assert!((units - 500.0).abs() < 1e-9);
//!
//! assert!(churn_rate(10, 0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub use bizmetrics_core::{MetricError, MetricResult};

pub mod balance_sheet;
pub mod calculator;
pub mod cashflows;
pub mod cost;
pub mod customer;
pub mod growth;
pub mod marketing;
pub mod operations;
pub mod profitability;
pub mod valuation;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bizmetrics_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use bizmetrics_core::{MetricError, MetricResult};

    // Profitability
    pub use crate::profitability::{
        ebit, gross_profit_margin, margin, return_on_assets, return_on_equity, roi,
    };

    // Growth
    pub use crate::growth::{cagr, growth_rate};

    // Cash flows
    pub use crate::cashflows::{npv, payback_period};

    // Cost structure
    pub use crate::cost::{breakeven_point, operating_leverage};

    // Balance sheet
    pub use crate::balance_sheet::{current_ratio, debt_to_equity, quick_ratio, working_capital};

    // Valuation
    pub use crate::valuation::{earnings_per_share, price_to_earnings};

    // Customers
    pub use crate::customer::{
        average_order_value, churn_rate, customer_acquisition_cost, customer_lifetime_value,
        ltv_to_cac, net_promoter_score, retention_rate,
    };

    // Marketing
    pub use crate::marketing::{
        conversion_rate, cost_per_lead, lead_conversion_rate, price_elasticity,
    };

    // Operations
    pub use crate::operations::{
        employee_productivity, employee_turnover_rate, inventory_turnover, time_to_market,
        time_to_market_from_str,
    };

    // Calculator
    pub use crate::calculator::BusinessMetricsCalculator;
}
