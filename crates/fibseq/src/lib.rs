//! fibseq library: application logic for the Fibonacci sequence generator.

pub mod app;
pub mod config;
pub mod errors;
pub mod interactive;
pub mod session;
pub mod version;
