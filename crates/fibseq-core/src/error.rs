//! Error type for sequence generation.

/// Error type for Fibonacci sequence generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A request violated a precondition (`n < 1`, `limit < 0`, out of range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A fixed-width computation could not represent the value at this index.
    #[error("arithmetic overflow: F({0}) does not fit in {1}")]
    ArithmeticOverflow(u64, &'static str),
}

impl FibError {
    /// Shorthand for building an `InvalidArgument` error.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::InvalidArgument("n must be at least 1".into());
        assert_eq!(err.to_string(), "invalid argument: n must be at least 1");

        let err = FibError::ArithmeticOverflow(94, "u64");
        assert_eq!(err.to_string(), "arithmetic overflow: F(94) does not fit in u64");
    }

    #[test]
    fn invalid_shorthand() {
        assert_eq!(
            FibError::invalid("x"),
            FibError::InvalidArgument("x".to_string())
        );
    }
}
