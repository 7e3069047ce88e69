//! Checks for style documents.
//!
//! Each check takes a `&StyleDocument` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::document::StyleDocument;
use crate::error::{Result, StyleError};
use crate::style::{resolve, SymbolizerOptions};
use crate::types::{Colour, Value, ValueOrExpression};

use super::warning::{Diagnostic, ValidationResult};

/// Warn about a document with no rules.
pub fn check_empty(doc: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    if doc.rules.is_empty() {
        result.push(
            Diagnostic::warning("mapstyle::lint::empty", "Style document has no rules")
                .with_help("Add entries under `rules:`"),
        );
    }
    result
}

/// Rule names must be unique.
pub fn check_duplicate_names(doc: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for rule in &doc.rules {
        if !seen.insert(rule.name.as_str()) {
            result.push(
                Diagnostic::error(
                    "mapstyle::lint::duplicate-rule",
                    format!("Rule name '{}' is used more than once", rule.name),
                )
                .with_help("Use distinct names so rules can be looked up unambiguously"),
            );
        }
    }

    result
}

/// Every symbolizer must construct, and literal values must have the
/// right type.
///
/// Attribute and computed settings depend on the feature and are not
/// checked here.
pub fn check_symbolizers(doc: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for rule in &doc.rules {
        if let Err(e) = rule.symbolizer.clone().build() {
            result.push(to_diagnostic(e).in_rule(&rule.name));
            continue;
        }

        for (property, slot) in slots(&rule.symbolizer) {
            if let Err(e) = slot.check_literal(property) {
                result.push(to_diagnostic(e).in_rule(&rule.name));
            }
        }
    }

    result
}

/// A typed property setting of a symbolizer.
enum Slot<'a> {
    Text(&'a ValueOrExpression<String>),
    Number(&'a ValueOrExpression<f64>),
}

impl Slot<'_> {
    fn check_literal(&self, property: &str) -> Result<()> {
        match self {
            Slot::Text(setting) if setting.is_literal() => {
                resolve::eval_string(&(*setting).clone().into_expression(), None, property)
                    .map(drop)
            }
            Slot::Number(setting) if setting.is_literal() => {
                resolve::eval_number(&(*setting).clone().into_expression(), None, property)
                    .map(drop)
            }
            _ => Ok(()),
        }
    }
}

/// Supplied settings in document order.
fn slots(options: &SymbolizerOptions) -> Vec<(&'static str, Slot<'_>)> {
    let (fill, stroke, width, opacity, size) = match options {
        SymbolizerOptions::Polygon(o) => (
            o.fill_color.as_ref(),
            o.stroke_color.as_ref(),
            o.stroke_width.as_ref(),
            o.opacity.as_ref(),
            None,
        ),
        SymbolizerOptions::Line(o) => (
            None,
            o.stroke_color.as_ref(),
            o.stroke_width.as_ref(),
            o.opacity.as_ref(),
            None,
        ),
        SymbolizerOptions::Shape(o) => (
            o.fill_color.as_ref(),
            o.stroke_color.as_ref(),
            o.stroke_width.as_ref(),
            o.opacity.as_ref(),
            o.size.as_ref(),
        ),
    };

    let mut slots = Vec::new();
    slots.extend(fill.map(|s| ("fillColor", Slot::Text(s))));
    slots.extend(stroke.map(|s| ("strokeColor", Slot::Text(s))));
    slots.extend(width.map(|s| ("strokeWidth", Slot::Number(s))));
    slots.extend(opacity.map(|s| ("opacity", Slot::Number(s))));
    slots.extend(size.map(|s| ("size", Slot::Number(s))));
    slots
}

fn to_diagnostic(err: StyleError) -> Diagnostic {
    match err {
        StyleError::Configuration { message, help } => {
            let d = Diagnostic::error("mapstyle::lint::config", message);
            match help {
                Some(help) => d.with_help(help),
                None => d,
            }
        }
        StyleError::TypeValidation { .. } => {
            Diagnostic::error("mapstyle::lint::literal-type", err.to_string())
        }
        other => Diagnostic::error("mapstyle::lint", other.to_string()),
    }
}

/// Warn about constant colours that are not hex colours.
pub fn check_colours(doc: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for rule in &doc.rules {
        let (fill, stroke) = match &rule.symbolizer {
            SymbolizerOptions::Polygon(o) => (o.fill_color.as_ref(), o.stroke_color.as_ref()),
            SymbolizerOptions::Line(o) => (None, o.stroke_color.as_ref()),
            SymbolizerOptions::Shape(o) => (o.fill_color.as_ref(), o.stroke_color.as_ref()),
        };

        for (property, setting) in [("fillColor", fill), ("strokeColor", stroke)] {
            let Some(colour) = setting.and_then(constant_str) else {
                continue;
            };
            if Colour::from_hex(colour).is_err() {
                result.push(
                    Diagnostic::warning(
                        "mapstyle::lint::colour",
                        format!("{} '{}' is not a hex colour", property, colour),
                    )
                    .in_rule(&rule.name)
                    .with_help("Renderers may not understand it; use #RGB or #RRGGBB"),
                );
            }
        }
    }

    result
}

/// Warn about constant opacities outside `[0, 1]` and negative sizes.
pub fn check_ranges(doc: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for rule in &doc.rules {
        let (opacity, width, size) = match &rule.symbolizer {
            SymbolizerOptions::Polygon(o) => (o.opacity.as_ref(), o.stroke_width.as_ref(), None),
            SymbolizerOptions::Line(o) => (o.opacity.as_ref(), o.stroke_width.as_ref(), None),
            SymbolizerOptions::Shape(o) => {
                (o.opacity.as_ref(), o.stroke_width.as_ref(), o.size.as_ref())
            }
        };

        if let Some(value) = opacity.and_then(constant_f64) {
            if !(0.0..=1.0).contains(&value) {
                result.push(
                    Diagnostic::warning(
                        "mapstyle::lint::opacity-range",
                        format!("opacity {} is outside 0..1", value),
                    )
                    .in_rule(&rule.name),
                );
            }
        }

        for (property, setting) in [("strokeWidth", width), ("size", size)] {
            if let Some(value) = setting.and_then(constant_f64) {
                if value < 0.0 {
                    result.push(
                        Diagnostic::warning(
                            "mapstyle::lint::negative",
                            format!("{} {} is negative", property, value),
                        )
                        .in_rule(&rule.name),
                    );
                }
            }
        }
    }

    result
}

fn constant_str(setting: &ValueOrExpression<String>) -> Option<&str> {
    match setting {
        ValueOrExpression::Constant(s) => Some(s),
        ValueOrExpression::Expression(e) => e.as_literal().and_then(Value::as_str),
    }
}

fn constant_f64(setting: &ValueOrExpression<f64>) -> Option<f64> {
    match setting {
        ValueOrExpression::Constant(n) => Some(*n),
        ValueOrExpression::Expression(e) => e.as_literal().and_then(Value::as_f64),
    }
}
