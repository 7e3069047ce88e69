//! Terminal status output for the mapstyle CLI.
//!
//! Status lines go to stderr with the verb right-aligned in a fixed column.
//! Stdout is reserved for machine-readable JSON.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::Severity;

const VERB_WIDTH: usize = 12;

/// Colour of a status verb or label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Good,
    Warn,
    Bad,
    Path,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Good => "\x1b[1;32m",
            Tone::Warn => "\x1b[1;33m",
            Tone::Bad => "\x1b[1;31m",
            Tone::Path => "\x1b[1;36m",
        }
    }
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Tone::Warn,
            Severity::Error => Tone::Bad,
        }
    }
}

/// Status printer; colours only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "    Compiled city.style.yaml (3 rules)"
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Good, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Bad, verb, message);
    }

    /// Highlight a file path.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(Tone::Path, text)
    }

    /// Coloured "error" / "warning" label for a diagnostic.
    pub fn severity(&self, severity: Severity) -> String {
        self.paint(severity.into(), &severity.to_string())
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if self.color {
            format!("{}{}\x1b[0m", tone.ansi(), text)
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        let verb = self.paint(tone, &format!("{:>width$}", verb, width = VERB_WIDTH));
        let _ = writeln!(io::stderr().lock(), "{} {}", verb, message);
    }
}

/// `plural(1, "rule", "rules")` → "1 rule".
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { many })
}

/// Path relative to the working directory when it is inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
