//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::document::load_style_file;
use crate::error::{Result, StyleError};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_document};

/// Lint style documents without evaluating them
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Style documents to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();
    let mut errors = 0;
    let mut warnings = 0;

    for file in &args.files {
        printer.status("Checking", &printer.cyan(&display_path(file)));

        let doc = load_style_file(file)?;
        let result = validate_document(&doc);
        print_diagnostics(&printer, &result);

        errors += result.error_count();
        warnings += result.warning_count();
    }

    let summary = format!(
        "{}, {}",
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    );

    if errors > 0 || (args.strict && warnings > 0) {
        printer.error("Failed", &summary);
        return Err(StyleError::Validation {
            message: format!("{} did not pass", plural(args.files.len(), "file", "files")),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning("Finished", &summary);
    } else {
        printer.status("Finished", &summary);
    }
    Ok(())
}
