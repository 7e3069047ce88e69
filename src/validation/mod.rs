//! Lint checks for style documents.
//!
//! Runs a suite of checks against a parsed document and reports errors
//! and warnings. Errors mean the document cannot be compiled or will fail
//! for every feature; warnings flag values a renderer may mishandle.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::document::StyleDocument;
use crate::output::Printer;

/// Run all checks against a style document.
pub fn validate_document(doc: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty(doc));
    result.merge(checks::check_duplicate_names(doc));
    result.merge(checks::check_symbolizers(doc));
    result.merge(checks::check_colours(doc));
    result.merge(checks::check_ranges(doc));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(printer: &Printer, result: &ValidationResult) {
    for d in result.iter() {
        let label = printer.severity(d.severity);
        match &d.rule {
            Some(rule) => eprintln!("  {}[{}]: rule '{}': {}", label, d.code, rule, d.message),
            None => eprintln!("  {}[{}]: {}", label, d.code, d.message),
        }
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_style_document;

    #[test]
    fn test_validate_empty_document() {
        let result = validate_document(&StyleDocument::default());
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_validate_clean_document() {
        let doc = parse_style_document(
            "rules:\n  - name: parks\n    symbolizer: { kind: polygon, fillColor: \"#00aa00\" }\n",
        )
        .unwrap();
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_validate_collects_all_checks() {
        let doc = parse_style_document(
            r##"
rules:
  - name: a
    symbolizer: { kind: polygon }
  - name: a
    symbolizer: { kind: line, strokeColor: grey, opacity: 2 }
"##,
        )
        .unwrap();

        let result = validate_document(&doc);
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 2);
    }
}
