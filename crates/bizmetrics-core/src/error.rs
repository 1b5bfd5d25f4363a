//! Error types for the BizMetrics library.
//!
//! Every metric has exactly one failure mode: an input outside the formula's
//! domain. Computations are deterministic, so an error is final for a given
//! set of inputs and is never worth retrying.

use thiserror::Error;

/// A specialized Result type for metric computations.
pub type MetricResult<T> = Result<T, MetricError>;

/// The error type for metric computations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// A precondition of the metric's formula was violated.
    #[error("Invalid input for {metric}: {reason}")]
    InvalidInput {
        /// Name of the metric that rejected its input.
        metric: &'static str,
        /// Description of the violated precondition.
        reason: String,
    },
}

impl MetricError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(metric: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            metric,
            reason: reason.into(),
        }
    }

    /// Creates an error for a denominator that is zero.
    #[must_use]
    pub fn zero_denominator(metric: &'static str, field: &str) -> Self {
        Self::invalid_input(metric, format!("{field} cannot be zero"))
    }

    /// Reattributes the error to `metric`, keeping the reason.
    #[must_use]
    pub fn with_metric(self, metric: &'static str) -> Self {
        match self {
            Self::InvalidInput { reason, .. } => Self::InvalidInput { metric, reason },
        }
    }

    /// Returns the name of the metric that produced this error.
    #[must_use]
    pub fn metric(&self) -> &'static str {
        match self {
            Self::InvalidInput { metric, .. } => metric,
        }
    }
}
