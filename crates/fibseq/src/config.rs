//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use num_bigint::BigInt;

use fibseq_core::{GenerationRequest, DEFAULT_COUNT};

/// Generation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// First N numbers.
    Count,
    /// Numbers up to a maximum value.
    Max,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table, statistics, and formula.
    Text,
    /// One JSON document per generation.
    Json,
}

/// fibseq: Fibonacci sequence generator.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Generation method.
    #[arg(long, value_enum, default_value_t = Mode::Count, env = "FIBSEQ_MODE")]
    pub mode: Mode,

    /// How many Fibonacci numbers to generate (count mode).
    #[arg(short, long, default_value_t = DEFAULT_COUNT, env = "FIBSEQ_N")]
    pub n: u64,

    /// Maximum value limit (max mode).
    #[arg(
        short,
        long = "max",
        default_value = "100",
        env = "FIBSEQ_MAX",
        allow_negative_numbers = true
    )]
    pub max: BigInt,

    /// Hide sequence statistics.
    #[arg(long)]
    pub no_stats: bool,

    /// Hide the mathematical formula.
    #[arg(long)]
    pub no_formula: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "FIBSEQ_FORMAT")]
    pub format: OutputFormat,

    /// Print very large numbers in full.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write the comma-separated sequence to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Spinner duration before showing results (e.g., "500ms", "1s").
    #[arg(long, default_value = "0", value_parser = parse_duration)]
    pub delay: Duration,

    /// Read commands from stdin until `quit`.
    #[arg(long)]
    pub interactive: bool,

    /// Restrict counts to 1..=50 and limits to 1..=1000.
    #[arg(long)]
    pub strict_range: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The request described by the mode flags.
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        match self.mode {
            Mode::Count => GenerationRequest::count(self.n),
            Mode::Max => GenerationRequest::max_value(self.max.clone()),
        }
    }

    /// How long the spinner is held before presenting.
    #[must_use]
    pub fn delay_duration(&self) -> Duration {
        self.delay
    }
}

/// Parse a duration string like "500ms", "2s", "1m". A bare number is
/// milliseconds.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (digits, unit_ms): (&str, u64) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, 1)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, 1_000)
    } else if let Some(mins) = s.strip_suffix('m') {
        (mins, 60_000)
    } else {
        (s, 1)
    };
    let n: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{s}' (expected e.g. 500ms, 2s, 1m)"))?;
    n.checked_mul(unit_ms)
        .map(Duration::from_millis)
        .ok_or_else(|| format!("duration '{s}' is too large"))
}
