//! # BizMetrics Core
//!
//! Core types and building blocks for the BizMetrics business metrics library.
//!
//! This crate provides the pieces shared by every metric:
//!
//! - **Errors**: [`MetricError`] and the [`MetricResult`] alias
//! - **Validation**: domain checks that turn a zero denominator or an
//!   out-of-range input into an error instead of `inf` or `NaN`
//! - **Types**: a [`Date`] newtype for calendar-based metrics
//! - **Reporting**: rounding and percent conversion for presenting results
//!
//! ## Example
//!
//! ```rust
//! use bizmetrics_core::prelude::*;
//!
//! let cost = ensure_nonzero("roi", "cost", 100.0).unwrap();
//! assert_eq!(cost, 100.0);
//!
//! let err = ensure_nonzero("roi", "cost", 0.0).unwrap_err();
//! assert!(err.to_string().contains("cost"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod report;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MetricError, MetricResult};
    pub use crate::report::{round_to, to_percent};
    pub use crate::types::Date;
    pub use crate::validation::{
        count_as_f64, ensure_finite, ensure_finite_result, ensure_non_negative, ensure_nonzero,
        ensure_nonzero_count, ensure_positive,
    };
}

// Re-export commonly used types at crate root
pub use error::{MetricError, MetricResult};
pub use types::Date;
