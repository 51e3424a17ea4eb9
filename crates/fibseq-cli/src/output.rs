//! CLI output formatting.

use std::io::{self, Write};

use num_bigint::BigUint;
use tracing::debug;

use fibseq_core::{GenerationRequest, GenerationResult, Term};

/// Numbers longer than this are abbreviated unless verbose output is on.
const MAX_INLINE_DIGITS: usize = 100;

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_value(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > MAX_INLINE_DIGITS {
        format!("{}...{} ({} digits)", &s[..20], &s[s.len() - 20..], s.len())
    } else {
        s
    }
}

/// One table cell: `F( i) =    value`.
#[must_use]
pub fn format_term(term: &Term, verbose: bool) -> String {
    format!(
        "F({:2}) = {:>8}",
        term.index,
        format_value(&term.value, verbose)
    )
}

/// Split terms into a left and right column; the right one takes the extra
/// element when the count is odd.
#[must_use]
pub fn split_columns(terms: &[Term]) -> (&[Term], &[Term]) {
    terms.split_at(terms.len() / 2)
}

/// Lay the terms out as two side-by-side columns.
#[must_use]
pub fn format_columns(terms: &[Term], verbose: bool) -> Vec<String> {
    let (left, right) = split_columns(terms);
    let left: Vec<String> = left.iter().map(|t| format_term(t, verbose)).collect();
    let right: Vec<String> = right.iter().map(|t| format_term(t, verbose)).collect();
    let width = left.iter().map(String::len).max().unwrap_or(0);

    // A single term has no left column to align against.
    if left.is_empty() {
        return right;
    }

    right
        .iter()
        .enumerate()
        .map(|(row, r)| {
            let l = left.get(row).map_or("", String::as_str);
            format!("{l:<width$}    {r}")
        })
        .collect()
}

/// Values joined with `", "`.
#[must_use]
pub fn join_values<'a>(values: impl IntoIterator<Item = &'a BigUint>) -> String {
    values
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Title line for a result.
#[must_use]
pub fn title(request: &GenerationRequest) -> String {
    match request {
        GenerationRequest::Count { n } => format!("First {n} Fibonacci Numbers"),
        GenerationRequest::MaxValue { limit } => format!("Fibonacci Numbers up to {limit}"),
    }
}

/// Last three values `(F(k), F(k-1), F(k-2))` of a count-bounded result with
/// at least three elements.
#[must_use]
pub fn formula_example(result: &GenerationResult) -> Option<(&BigUint, &BigUint, &BigUint)> {
    if !matches!(result.request, GenerationRequest::Count { .. }) {
        return None;
    }
    match result.terms.as_slice() {
        [.., a, b, c] => Some((&c.value, &b.value, &a.value)),
        _ => None,
    }
}

/// Write the comma-separated values of a result to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, result: &GenerationResult) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", join_values(result.values()))?;
    debug!(path, count = result.len(), "sequence written");
    Ok(())
}
