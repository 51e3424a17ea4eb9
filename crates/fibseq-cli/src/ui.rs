//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Styled section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Styled `label: value` metric line.
#[must_use]
pub fn metric(label: &str, value: &str) -> String {
    if is_color_disabled() {
        format!("  {label}: {value}")
    } else {
        format!("  {}: {}", style(label).dim(), style(value).bold())
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn header_text() {
        assert_eq!(strip_ansi_codes(&header("Sequence Statistics")), "=== Sequence Statistics ===");
    }

    #[test]
    fn metric_text() {
        assert_eq!(strip_ansi_codes(&metric("Sum", "88")), "  Sum: 88");
    }

    #[test]
    fn print_functions_do_not_panic() {
        print_success("Operation completed");
        print_error("Something went wrong");
        print_success("");
        print_error("");
    }

    #[test]
    fn print_functions_with_unicode() {
        print_success("F(n) = F(n\u{2212}1) + F(n\u{2212}2)");
        print_error("\u{1F522} invalid");
    }
}
