//! Generation requests and their validation.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;
use serde::Serialize;

use crate::constants::{COUNT_RANGE, LIMIT_RANGE};
use crate::error::FibError;

/// One user action: either "first `n` numbers" or "numbers up to `limit`".
///
/// The limit is signed so that a negative value coming from user input can be
/// carried to the core and rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationRequest {
    /// First `n` elements, paired with their index.
    Count { n: u64 },
    /// Every element up to and including `limit`.
    MaxValue {
        #[serde(serialize_with = "crate::result::decimal")]
        limit: BigInt,
    },
}

impl GenerationRequest {
    #[must_use]
    pub fn count(n: u64) -> Self {
        Self::Count { n }
    }

    #[must_use]
    pub fn max_value(limit: impl Into<BigInt>) -> Self {
        Self::MaxValue {
            limit: limit.into(),
        }
    }

    /// Short mode name used in logs and JSON.
    #[must_use]
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Count { .. } => "count",
            Self::MaxValue { .. } => "max_value",
        }
    }

    /// Check the preconditions of the core producer.
    pub fn validate(&self) -> Result<(), FibError> {
        match self {
            Self::Count { n } if *n < 1 => Err(FibError::invalid(format!(
                "count must be at least 1, got {n}"
            ))),
            Self::MaxValue { limit } if limit.is_negative() => Err(FibError::invalid(format!(
                "maximum value must not be negative, got {limit}"
            ))),
            _ => Ok(()),
        }
    }

    /// Check the request against the ranges offered by the interactive front end.
    pub fn validate_ui_range(&self) -> Result<(), FibError> {
        self.validate()?;
        match self {
            Self::Count { n } if !COUNT_RANGE.contains(n) => Err(FibError::invalid(format!(
                "count {n} outside {}..={}",
                COUNT_RANGE.start(),
                COUNT_RANGE.end()
            ))),
            Self::MaxValue { limit }
                if *limit < BigInt::from(*LIMIT_RANGE.start())
                    || *limit > BigInt::from(*LIMIT_RANGE.end()) =>
            {
                Err(FibError::invalid(format!(
                    "maximum value {limit} outside {}..={}",
                    LIMIT_RANGE.start(),
                    LIMIT_RANGE.end()
                )))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count { n } => write!(f, "first {n} numbers"),
            Self::MaxValue { limit } => write!(f, "numbers up to {limit}"),
        }
    }
}
