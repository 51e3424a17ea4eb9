//! # fibseq-cli
//!
//! CLI output, result presentation, spinner, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::{JsonResultPresenter, ResultPresenter, TextResultPresenter};
