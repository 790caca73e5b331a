//! Core error types.
//!
//! The core has a single failure mode: a caller handed it input that cannot
//! describe a valid test. Everything else (malformed answers, out-of-phase
//! transitions) is total and never errors.

use thiserror::Error;

/// Errors raised by the question generator and session controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The candidate name, question count, or question terms were rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CoreError::InvalidInput(reason.into())
    }

    /// Returns `true` for [`CoreError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message() {
        let err = CoreError::invalid("candidate name must not be empty");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "invalid input: candidate name must not be empty"
        );
    }
}
