//! # fibseq-core
//!
//! Fibonacci sequence producer for the fibseq tool.
//! Produces the sequence lazily, truncated to an element count, or up to a
//! maximum value, and computes the aggregates shown alongside it.

pub mod checked;
pub mod constants;
pub mod error;
pub mod generator;
pub mod generator_iterative;
pub mod iterator;
pub mod producer;
pub mod request;
pub mod result;
pub mod stats;

// Re-exports
pub use constants::{exit_codes, COUNT_RANGE, DEFAULT_COUNT, DEFAULT_LIMIT, LIMIT_RANGE};
pub use error::FibError;
pub use generator::SequenceGenerator;
pub use generator_iterative::IterativeGenerator;
pub use iterator::{sequence, FibIterator};
pub use producer::{generate_first_n, generate_up_to, generate_up_to_u64};
pub use request::GenerationRequest;
pub use result::{GenerationResult, Term};
pub use stats::SequenceStats;

/// Run `request` through a fresh [`IterativeGenerator`].
///
/// # Example
/// ```
/// use fibseq_core::{generate, GenerationRequest};
/// let result = generate(&GenerationRequest::count(10)).unwrap();
/// assert_eq!(result.stats.sum().to_string(), "88");
/// ```
pub fn generate(request: &GenerationRequest) -> Result<GenerationResult, FibError> {
    IterativeGenerator::new().generate(request)
}
