//! Iterative Fibonacci sequence generator.

use tracing::debug;

use crate::error::FibError;
use crate::generator::SequenceGenerator;
use crate::producer::{generate_first_n, generate_up_to};
use crate::request::GenerationRequest;
use crate::result::{GenerationResult, Term};

/// Generator driving the additive recurrence one element at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeGenerator;

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SequenceGenerator for IterativeGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, FibError> {
        request.validate()?;

        let terms: Vec<Term> = match request {
            GenerationRequest::Count { n } => generate_first_n(*n)?
                .into_iter()
                .map(Term::from)
                .collect(),
            GenerationRequest::MaxValue { limit } => generate_up_to(limit)?
                .into_iter()
                .zip(0u64..)
                .map(|(value, index)| Term::new(index, value))
                .collect(),
        };

        debug!(
            generator = self.name(),
            mode = request.mode_name(),
            count = terms.len(),
            "sequence generated"
        );
        Ok(GenerationResult::new(request.clone(), terms))
    }

    fn name(&self) -> &'static str {
        "IterativeGenerator"
    }
}
