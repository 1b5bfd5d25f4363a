//! # BizMetrics
//!
//! Business and financial metric formulas: ROI, margin, CAGR, NPV, churn,
//! CLTV, liquidity ratios, and more. This crate re-exports the public API of
//! the workspace crates so applications need a single dependency.
//!
//! ```rust
//! use bizmetrics::prelude::*;
//!
//! let margin = margin(200.0, 150.0).unwrap();
//! assert!((margin - 0.25).abs() < 1e-12);
//!
//! let config = CalculatorConfig::new().with_coefficient("price", -0.05);
//! let calculator = BusinessMetricsCalculator::from_config(&config).unwrap();
//! assert!((calculator.price_elasticity("price").unwrap() - 0.05).abs() < 1e-12);
//! ```

#![warn(missing_docs)]

pub use bizmetrics_analytics as analytics;
pub use bizmetrics_config as config;
pub use bizmetrics_core::{report, types, validation, Date, MetricError, MetricResult};

/// Everything needed to compute and report metrics.
pub mod prelude {
    pub use bizmetrics_analytics::prelude::*;
    pub use bizmetrics_config::{CalculatorConfig, ConfigError, ConfigResult};
    pub use bizmetrics_core::report::{round_to, to_percent};
    pub use bizmetrics_core::Date;
}
