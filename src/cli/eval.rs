//! Eval command implementation.
//!
//! Compiles a style document, evaluates its rules against each feature and
//! prints the resulting literals as a JSON array on stdout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::document::{load_style_file, Stylesheet};
use crate::error::{Result, StyleError};
use crate::output::{display_path, plural, Printer};
use crate::style::{AnyLiteral, Symbolizer};
use crate::types::{parse_features, Feature};

/// Evaluate style rules against features and print literals as JSON
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Style document (YAML or JSON)
    pub style: PathBuf,

    /// JSON array of features; without it rules are evaluated once with no feature
    #[arg(long, short)]
    pub features: Option<PathBuf>,

    /// Only evaluate the named rule
    #[arg(long)]
    pub rule: Option<String>,
}

/// One line of eval output.
#[derive(Debug, Serialize)]
pub struct Evaluated<'a> {
    pub feature: Option<&'a str>,
    pub rule: &'a str,
    pub style: AnyLiteral,
}

pub fn run(args: EvalArgs) -> Result<()> {
    let printer = Printer::new();

    let stylesheet = load_style_file(&args.style)?.compile()?;
    printer.status(
        "Compiled",
        &format!(
            "{} ({})",
            printer.cyan(&display_path(&args.style)),
            plural(stylesheet.len(), "rule", "rules")
        ),
    );

    let features = args.features.as_deref().map(load_features).transpose()?;

    let results = evaluate_all(&stylesheet, features.as_deref(), args.rule.as_deref())
        .map_err(|e| {
            printer.error("Failed", &e.to_string());
            e
        })?;

    let json = serde_json::to_string_pretty(&results).map_err(io::Error::from)?;
    println!("{}", json);

    printer.status("Finished", &plural(results.len(), "literal", "literals"));
    Ok(())
}

fn load_features(path: &Path) -> Result<Vec<Feature>> {
    let source = fs::read_to_string(path).map_err(|e| StyleError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read features: {}", e),
    })?;
    parse_features(&source)
}

/// Evaluate rules against every feature, or once with no feature when no
/// feature list is given. An empty list yields no results.
pub fn evaluate_all<'a>(
    stylesheet: &'a Stylesheet,
    features: Option<&'a [Feature]>,
    only: Option<&str>,
) -> Result<Vec<Evaluated<'a>>> {
    let rules: Vec<_> = match only {
        Some(name) => {
            let rule = stylesheet.get(name).ok_or_else(|| StyleError::Validation {
                message: format!("No rule named '{}'", name),
                help: Some(format!(
                    "Available rules: {}",
                    stylesheet
                        .rules()
                        .iter()
                        .map(|r| r.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
            })?;
            vec![rule]
        }
        None => stylesheet.rules().iter().collect(),
    };

    let targets: Vec<Option<&Feature>> = match features {
        Some(features) => features.iter().map(Some).collect(),
        None => vec![None],
    };

    let mut results = Vec::with_capacity(rules.len() * targets.len());
    for feature in targets {
        for &rule in &rules {
            let style = rule.symbolizer.create_literal(feature)?;
            results.push(Evaluated {
                feature: feature.and_then(|f| f.id.as_deref()),
                rule: &rule.name,
                style,
            });
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_style_document;

    fn stylesheet() -> Stylesheet {
        parse_style_document(
            r##"
rules:
  - name: parks
    symbolizer: { kind: polygon, fillColor: { attribute: colour } }
  - name: outline
    symbolizer: { kind: line }
"##,
        )
        .unwrap()
        .compile()
        .unwrap()
    }

    #[test]
    fn test_evaluate_per_feature() {
        let sheet = stylesheet();
        let features = vec![
            Feature::new().with_id("a").with_property("colour", "#ff0000"),
            Feature::new().with_id("b").with_property("colour", "#00ff00"),
        ];

        let results = evaluate_all(&sheet, Some(features.as_slice()), None).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].feature, Some("a"));
        assert_eq!(results[0].rule, "parks");
        assert_eq!(results[3].feature, Some("b"));
        assert_eq!(results[3].rule, "outline");
    }

    #[test]
    fn test_evaluate_single_rule_without_features() {
        let sheet = stylesheet();
        let results = evaluate_all(&sheet, None, Some("outline")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].feature, None);
    }

    #[test]
    fn test_empty_feature_list_yields_nothing() {
        let sheet = stylesheet();
        let results = evaluate_all(&sheet, Some(&[][..]), None).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_unknown_rule() {
        let sheet = stylesheet();
        let err = evaluate_all(&sheet, None, Some("rivers")).unwrap_err();
        assert!(matches!(err, StyleError::Validation { .. }));
    }

    #[test]
    fn test_missing_attribute_fails() {
        let sheet = stylesheet();
        let err = evaluate_all(&sheet, None, Some("parks")).unwrap_err();
        assert_eq!(err.property(), Some("fillColor"));
    }
}
