//! BizMetrics Configuration Layer
//!
//! Holds the settings a [`BusinessMetricsCalculator`] is built from: the
//! regression coefficients of a marketing-mix model and the number of decimal
//! places used when results are reported.
//!
//! [`BusinessMetricsCalculator`]: https://docs.rs/bizmetrics-analytics
//!
//! # File format
//!
//! TOML (`.toml`) or JSON (`.json`), chosen by file extension:
//!
//! ```toml
//! precision = 2
//!
//! [coefficients]
//! investment_variable = 0.1
//! price = -0.05
//! ```
//!
//! # Example
//!
//! ```rust
//! use bizmetrics_config::CalculatorConfig;
//!
//! let config = CalculatorConfig::from_toml_str(
//!     r#"
//!     precision = 3
//!
//!     [coefficients]
//!     price = -0.05
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.precision, 3);
//! assert_eq!(config.coefficient("price"), Some(-0.05));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod error;

pub use calculator::{CalculatorConfig, ConfigFormat, DEFAULT_PRECISION, MAX_PRECISION};
pub use error::{ConfigError, ConfigResult, ValidationError};
