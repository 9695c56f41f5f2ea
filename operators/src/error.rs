//! Error types for scalar operators.
//!
//! The only failures at this layer are numeric-domain violations.
//! They are reported to the caller as soon as they happen; nothing is
//! retried and no default value is substituted.

use thiserror::Error;

/// Errors raised by fallible scalar operators.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum OperatorError {
    /// Input lies outside the operator's mathematical domain.
    #[error("Math domain error in {op}: input {value} is out of range")]
    Domain { op: &'static str, value: f64 },

    /// The operator would divide by zero.
    #[error("Division by zero in {op}")]
    DivisionByZero { op: &'static str },
}

impl OperatorError {
    /// Name of the operator that failed.
    pub fn op(&self) -> &'static str {
        match self {
            OperatorError::Domain { op, .. } | OperatorError::DivisionByZero { op } => op,
        }
    }
}

/// Result alias for fallible scalar operators.
pub type OperatorResult<T> = Result<T, OperatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_message_names_op_and_input() {
        let err = OperatorError::Domain {
            op: "log",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Math domain error in log: input -1 is out of range"
        );
        assert_eq!(err.op(), "log");
    }

    #[test]
    fn division_error_message_names_op() {
        let err = OperatorError::DivisionByZero { op: "inv" };
        assert_eq!(err.to_string(), "Division by zero in inv");
        assert_eq!(err.op(), "inv");
    }
}
