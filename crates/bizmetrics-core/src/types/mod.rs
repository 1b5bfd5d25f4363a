//! Domain types for business metrics.
//!
//! - [`Date`]: Calendar date for time-based metrics such as time to market

mod date;

pub use date::Date;
