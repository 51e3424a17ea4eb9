//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Program name and version, e.g. `fibseq 0.1.0`.
#[must_use]
pub fn full_version() -> String {
    format!("fibseq {}", version())
}
