//! Style documents and compiled stylesheets.
//!
//! A style document is a YAML (or JSON) file listing named rules, each
//! with one symbolizer:
//!
//! ```yaml
//! rules:
//!   - name: parks
//!     symbolizer:
//!       kind: polygon
//!       fillColor: "#00aa00"
//!       opacity: { attribute: density }
//!   - name: roads
//!     symbolizer:
//!       kind: line
//!       strokeWidth: 2
//! ```
//!
//! Compiling a document builds every symbolizer up front, so configuration
//! errors surface before any feature is evaluated.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StyleError};
use crate::style::{AnyLiteral, AnySymbolizer, Symbolizer, SymbolizerOptions};
use crate::types::Feature;

/// A parsed, not yet compiled, style document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleDocument {
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// A named rule as written in a style document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub name: String,
    pub symbolizer: SymbolizerOptions,
}

/// Parse a style document from YAML or JSON source.
pub fn parse_style_document(source: &str) -> Result<StyleDocument> {
    if source.trim().is_empty() {
        return Ok(StyleDocument::default());
    }
    serde_yaml::from_str(source).map_err(|e| StyleError::Parse {
        message: format!("Invalid style document: {}", e),
        help: Some("Expected a `rules:` list of {name, symbolizer} entries".to_string()),
    })
}

/// Read and parse a style document from disk.
pub fn load_style_file(path: &Path) -> Result<StyleDocument> {
    let source = fs::read_to_string(path).map_err(|e| StyleError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read style file: {}", e),
    })?;
    parse_style_document(&source)
}

impl StyleDocument {
    /// Build every symbolizer in the document.
    ///
    /// Configuration errors are prefixed with the name of the failing rule.
    pub fn compile(&self) -> Result<Stylesheet> {
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                rule.symbolizer
                    .clone()
                    .build()
                    .map(|symbolizer| Rule {
                        name: rule.name.clone(),
                        symbolizer,
                    })
                    .map_err(|e| in_rule(&rule.name, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Stylesheet { rules })
    }
}

fn in_rule(name: &str, err: StyleError) -> StyleError {
    match err {
        StyleError::Configuration { message, help } => StyleError::Configuration {
            message: format!("rule '{}': {}", name, message),
            help,
        },
        other => other,
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub symbolizer: AnySymbolizer,
}

/// A compiled style document, ready to evaluate.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create a stylesheet from already built rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against a feature, in document order.
    pub fn evaluate(&self, feature: Option<&Feature>) -> Result<Vec<(&str, AnyLiteral)>> {
        self.rules
            .iter()
            .map(|rule| {
                rule.symbolizer
                    .create_literal(feature)
                    .map(|literal| (rule.name.as_str(), literal))
            })
            .collect()
    }
}
