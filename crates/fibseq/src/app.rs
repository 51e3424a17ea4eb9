//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use fibseq_cli::output::write_to_file;
use fibseq_cli::spinner::{Spinner, SPINNER_MESSAGE};
use fibseq_cli::{JsonResultPresenter, ResultPresenter, TextResultPresenter};
use fibseq_core::{GenerationRequest, GenerationResult};

use crate::config::{AppConfig, OutputFormat};
use crate::interactive::run_session;
use crate::session::GenerationCounter;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibseq_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let presenter = make_presenter(config);
    let mut counter = GenerationCounter::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.interactive {
        return run_session(config, presenter.as_ref(), &mut counter, io::stdin().lock(), &mut out);
    }

    let request = config.request();
    let result = generate_once(config, presenter.as_ref(), &mut counter, &request, &mut out)?;

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_to_file(path, &result).with_context(|| format!("writing sequence to {path}"))?;
        if !config.quiet && config.format == OutputFormat::Text {
            fibseq_cli::ui::print_success(&format!("Sequence written to {path}"));
        }
    }

    Ok(())
}

/// Presenter matching the configured output format.
#[must_use]
pub fn make_presenter(config: &AppConfig) -> Box<dyn ResultPresenter> {
    match config.format {
        OutputFormat::Text => Box::new(TextResultPresenter::new(
            !config.no_stats,
            !config.no_formula,
            config.verbose,
            config.quiet,
        )),
        OutputFormat::Json => Box::new(JsonResultPresenter::new(!config.quiet)),
    }
}

/// Generate one request, count it, and present the result.
pub fn generate_once(
    config: &AppConfig,
    presenter: &dyn ResultPresenter,
    counter: &mut GenerationCounter,
    request: &GenerationRequest,
    out: &mut dyn Write,
) -> Result<GenerationResult> {
    if config.strict_range {
        request.validate_ui_range()?;
    }

    let hidden = config.quiet || config.format == OutputFormat::Json;
    let spinner = Spinner::start(SPINNER_MESSAGE, hidden);
    let result = fibseq_core::generate(request)?;
    spinner.hold_and_clear(config.delay_duration());

    let generation = counter.record();
    info!(generation, %request, count = result.len(), "generation complete");

    presenter.present(&result, out)?;
    out.flush()?;
    Ok(result)
}
