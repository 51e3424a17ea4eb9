//! Realized sequence plus its aggregates.

use std::fmt::Display;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use crate::request::GenerationRequest;
use crate::stats::SequenceStats;

/// Serialize any displayable number as a decimal string.
pub(crate) fn decimal<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// One element of a generated sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    /// Zero-based position in the Fibonacci sequence.
    pub index: u64,
    /// F(index).
    #[serde(serialize_with = "decimal")]
    pub value: BigUint,
}

impl Term {
    #[must_use]
    pub fn new(index: u64, value: BigUint) -> Self {
        Self { index, value }
    }
}

impl From<(u64, BigUint)> for Term {
    fn from((index, value): (u64, BigUint)) -> Self {
        Self { index, value }
    }
}

/// Outcome of a single generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub request: GenerationRequest,
    pub terms: Vec<Term>,
    pub stats: SequenceStats,
}

impl GenerationResult {
    /// Wrap `terms` and compute their aggregates.
    #[must_use]
    pub fn new(request: GenerationRequest, terms: Vec<Term>) -> Self {
        let stats = SequenceStats::from_values(terms.iter().map(|t| &t.value));
        Self {
            request,
            terms,
            stats,
        }
    }

    /// Values in generation order.
    pub fn values(&self) -> impl Iterator<Item = &BigUint> + '_ {
        self.terms.iter().map(|t| &t.value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
