//! Line-oriented interactive mode.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use num_bigint::BigInt;

use fibseq_cli::ResultPresenter;
use fibseq_core::{FibError, GenerationRequest};

use crate::app::generate_once;
use crate::config::{AppConfig, OutputFormat};
use crate::session::GenerationCounter;
use crate::version::full_version;

const HELP: &str = "\
Commands:
  count <n>      first n Fibonacci numbers
  max <limit>    Fibonacci numbers up to limit
  total          number of generations so far
  help           this message
  quit           leave";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate(GenerationRequest),
    Total,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = FibError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(FibError::InvalidArgument(format!(
                "too many arguments in '{line}'"
            )));
        }

        match (verb.as_str(), arg) {
            ("count" | "n" | "first", Some(raw)) => raw
                .parse::<u64>()
                .map(|n| Self::Generate(GenerationRequest::count(n)))
                .map_err(|_| FibError::InvalidArgument(format!("invalid count '{raw}'"))),
            ("max" | "upto" | "up-to", Some(raw)) => raw
                .parse::<BigInt>()
                .map(|limit| Self::Generate(GenerationRequest::max_value(limit)))
                .map_err(|_| FibError::InvalidArgument(format!("invalid maximum value '{raw}'"))),
            ("count" | "n" | "first" | "max" | "upto" | "up-to", None) => Err(
                FibError::InvalidArgument(format!("'{verb}' needs a number")),
            ),
            ("total" | "stats", None) => Ok(Self::Total),
            ("help" | "?", None) => Ok(Self::Help),
            ("quit" | "exit" | "q", None) => Ok(Self::Quit),
            _ => Err(FibError::InvalidArgument(format!(
                "unknown command '{}'",
                line.trim()
            ))),
        }
    }
}

/// Run commands from `input` until `quit` or end of input.
///
/// Invalid commands and rejected requests are reported and the session goes
/// on; I/O failures end it.
pub fn run_session<R: BufRead>(
    config: &AppConfig,
    presenter: &dyn ResultPresenter,
    counter: &mut GenerationCounter,
    input: R,
    out: &mut dyn Write,
) -> Result<()> {
    if !config.quiet {
        notice(
            config,
            out,
            &format!("{} interactive mode. Type 'help' for commands.", full_version()),
        )?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                presenter.present_error(&e.to_string());
                continue;
            }
        };

        match command {
            Command::Generate(request) => {
                if let Err(err) = generate_once(config, presenter, counter, &request, out) {
                    match err.downcast_ref::<FibError>() {
                        Some(e) => presenter.present_error(&e.to_string()),
                        None => return Err(err),
                    }
                }
            }
            Command::Total => notice(config, out, &total_line(counter))?,
            Command::Help => notice(config, out, HELP)?,
            Command::Quit => break,
        }
    }

    notice(config, out, &total_line(counter))?;
    Ok(())
}

fn total_line(counter: &GenerationCounter) -> String {
    format!("Total Generations: {}", counter.total())
}

/// Session chatter goes to stderr in JSON mode so stdout stays a stream of
/// JSON documents.
fn notice(config: &AppConfig, out: &mut dyn Write, text: &str) -> io::Result<()> {
    match config.format {
        OutputFormat::Text => writeln!(out, "{text}"),
        OutputFormat::Json => writeln!(io::stderr(), "{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fibseq_cli::TextResultPresenter;

    #[test]
    fn parse_commands() {
        assert_eq!(
            "count 10".parse::<Command>().unwrap(),
            Command::Generate(GenerationRequest::count(10))
        );
        assert_eq!(
            "MAX 100".parse::<Command>().unwrap(),
            Command::Generate(GenerationRequest::max_value(100))
        );
        assert_eq!("total".parse::<Command>().unwrap(), Command::Total);
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!(" quit ".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn parse_negative_limit_reaches_core() {
        assert_eq!(
            "max -4".parse::<Command>().unwrap(),
            Command::Generate(GenerationRequest::max_value(-4))
        );
    }

    #[test]
    fn parse_errors() {
        assert!("count".parse::<Command>().is_err());
        assert!("count ten".parse::<Command>().is_err());
        assert!("count -1".parse::<Command>().is_err());
        assert!("count 1 2".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }

    fn session(script: &str) -> (String, GenerationCounter) {
        let config = AppConfig::try_parse_from(["fibseq", "--interactive", "--no-formula"]).unwrap();
        let presenter = TextResultPresenter::new(true, false, false, true);
        let mut counter = GenerationCounter::new();
        let mut out = Vec::new();
        run_session(&config, &presenter, &mut counter, script.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), counter)
    }

    #[test]
    fn session_counts_successful_generations() {
        let (out, counter) = session("count 5\nmax 1\ncount 0\nbogus\ntotal\nquit\ncount 4\n");
        assert_eq!(counter.total(), 2);
        assert!(out.contains("0, 1, 1, 2, 3\n"));
        assert!(out.contains("0, 1, 1\n"));
        assert!(out.contains("Total Generations: 2"));
        assert!(!out.contains("0, 1, 1, 2\n"));
    }

    #[test]
    fn json_session_keeps_stdout_machine_readable() {
        let config = AppConfig::try_parse_from(["fibseq", "--interactive", "--format", "json"]).unwrap();
        let presenter = fibseq_cli::JsonResultPresenter::new(true);
        let mut counter = GenerationCounter::new();
        let mut out = Vec::new();
        run_session(&config, &presenter, &mut counter, "help\ncount 3\ntotal\nmax 1\n".as_bytes(), &mut out)
            .unwrap();

        let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_slice(&out)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["terms"][2]["value"], "1");
        assert_eq!(docs[1]["request"]["mode"], "max_value");
        assert_eq!(counter.total(), 2);
    }

    #[test]
    fn session_ends_at_eof() {
        let (out, counter) = session("count 2\n\n");
        assert_eq!(counter.total(), 1);
        assert!(out.ends_with("Total Generations: 1\n"));
    }
}
