//! Result presenters.

use std::io::{self, Write};

use fibseq_core::{GenerationRequest, GenerationResult};

use crate::output::{format_columns, format_value, formula_example, join_values, title};
use crate::ui::{header, metric, print_error};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Write one generation result.
    fn present(&self, result: &GenerationResult, out: &mut dyn Write) -> io::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Human-readable presenter: table or joined list, statistics, formula.
#[derive(Debug, Clone, Copy)]
pub struct TextResultPresenter {
    show_stats: bool,
    show_formula: bool,
    verbose: bool,
    quiet: bool,
}

impl TextResultPresenter {
    #[must_use]
    pub fn new(show_stats: bool, show_formula: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            show_stats,
            show_formula,
            verbose,
            quiet,
        }
    }

    fn present_sequence(&self, result: &GenerationResult, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", header(&title(&result.request)))?;
        match result.request {
            GenerationRequest::Count { .. } => {
                for line in format_columns(&result.terms, self.verbose) {
                    writeln!(out, "{line}")?;
                }
            }
            GenerationRequest::MaxValue { .. } => {
                writeln!(out, "Sequence:")?;
                writeln!(out, "{}", join_values(result.values()))?;
            }
        }
        Ok(())
    }

    fn present_stats(&self, result: &GenerationResult, out: &mut dyn Write) -> io::Result<()> {
        let stats = &result.stats;
        writeln!(out)?;
        writeln!(out, "{}", header("Sequence Statistics"))?;
        writeln!(out, "{}", metric("Total Numbers", &stats.count().to_string()))?;
        if let Some(max) = stats.max() {
            writeln!(out, "{}", metric("Largest Number", &format_value(max, self.verbose)))?;
        }
        writeln!(out, "{}", metric("Sum", &format_value(stats.sum(), self.verbose)))?;
        if matches!(result.request, GenerationRequest::MaxValue { .. }) {
            if let Some(avg) = stats.format_average(2) {
                writeln!(out, "{}", metric("Average", &avg))?;
            }
        }
        Ok(())
    }

    fn present_formula(&self, result: &GenerationResult, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", header("Mathematical Formula"))?;
        writeln!(out, "F(n) = F(n-1) + F(n-2)")?;
        writeln!(out, "F(0) = 0, F(1) = 1")?;
        if let Some((last, prev1, prev2)) = formula_example(result) {
            writeln!(
                out,
                "Example: {} = {} + {}",
                format_value(last, self.verbose),
                format_value(prev1, self.verbose),
                format_value(prev2, self.verbose)
            )?;
        }
        Ok(())
    }
}

impl ResultPresenter for TextResultPresenter {
    fn present(&self, result: &GenerationResult, out: &mut dyn Write) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", join_values(result.values()));
        }

        self.present_sequence(result, out)?;
        if self.show_stats {
            self.present_stats(result, out)?;
        }
        if self.show_formula && result.len() > 2 {
            self.present_formula(result, out)?;
        }
        Ok(())
    }
}

/// Machine-readable presenter writing one JSON document per result.
#[derive(Debug, Clone, Copy)]
pub struct JsonResultPresenter {
    pretty: bool,
}

impl JsonResultPresenter {
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present(&self, result: &GenerationResult, out: &mut dyn Write) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, result)?;
        } else {
            serde_json::to_writer(&mut *out, result)?;
        }
        writeln!(out)
    }
}
