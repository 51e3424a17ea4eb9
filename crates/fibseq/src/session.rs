//! Per-session generation counter.

/// Number of successful generations in one session.
///
/// Owned by whoever drives the session and passed down explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationCounter {
    total: u64,
}

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more generation and return the new total.
    pub fn record(&mut self) -> u64 {
        self.total += 1;
        self.total
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }
}
