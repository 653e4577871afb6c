//! Terminal output: colors, sections, JSON.

use std::io::IsTerminal;

/// Check if color output is enabled.
pub fn color_enabled(no_color_flag: bool) -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if no_color_flag || std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Styled {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }
}

/// Section header (e.g. "Statistics").
pub fn section_line(s: &Styled, title: &str) -> String {
    s.bold(title)
}

/// Pretty JSON for stdout.
pub fn json_string(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
