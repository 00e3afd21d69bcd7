//! Structured error types for the analytics pipeline.
//!
//! The pipeline is total over its documented inputs. The only classed
//! failure is a non-positive size parameter or a blank symbol, which is
//! signalled rather than clamped so that a bad configuration never yields
//! an empty or malformed series.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl PipelineError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Fail unless `value >= 1`.
    pub(crate) fn require_positive(name: &'static str, value: usize) -> Result<(), Self> {
        if value == 0 {
            Err(Self::invalid(name, "must be at least 1"))
        } else {
            Ok(())
        }
    }
}
