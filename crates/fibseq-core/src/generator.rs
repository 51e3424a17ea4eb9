//! Sequence generator trait.

use crate::error::FibError;
use crate::request::GenerationRequest;
use crate::result::GenerationResult;

/// Trait for turning a [`GenerationRequest`] into a [`GenerationResult`].
///
/// Implementations hold no sequence state between calls; each `generate`
/// starts from F(0).
pub trait SequenceGenerator: Send + Sync {
    /// Validate `request` and produce the realized sequence with its aggregates.
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, FibError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}
