//! Shared slot resolution and evaluation helpers for symbolizers.

use crate::error::{Result, StyleError};
use crate::types::{Expression, Feature, Value, ValueOrExpression};

/// Resolve an optional setting; absent stays absent.
pub(crate) fn optional<T: Into<Value>>(setting: Option<ValueOrExpression<T>>) -> Option<Expression> {
    setting.map(ValueOrExpression::into_expression)
}

/// Resolve a setting, falling back to a literal default.
pub(crate) fn or_default<T: Into<Value>>(
    setting: Option<ValueOrExpression<T>>,
    default: impl Into<Value>,
) -> Expression {
    match setting {
        Some(setting) => setting.into_expression(),
        None => Expression::literal(default),
    }
}

/// Resolve stroke colour and width as a pair.
///
/// If either is supplied both slots are filled, the missing one from the
/// defaults. If neither is supplied both stay empty.
pub(crate) fn stroke_pair(
    colour: Option<ValueOrExpression<String>>,
    width: Option<ValueOrExpression<f64>>,
    default_colour: &str,
    default_width: f64,
) -> (Option<Expression>, Option<Expression>) {
    if colour.is_none() && width.is_none() {
        return (None, None);
    }
    (
        Some(or_default(colour, default_colour)),
        Some(or_default(width, default_width)),
    )
}

/// Evaluate an expression that must produce a string.
pub(crate) fn eval_string(
    expr: &Expression,
    feature: Option<&Feature>,
    property: &str,
) -> Result<String> {
    match expr.evaluate(feature) {
        Value::String(s) => Ok(s),
        other => Err(type_error(property, "a string", other.kind().name())),
    }
}

/// Evaluate an expression that must produce a finite number.
pub(crate) fn eval_number(
    expr: &Expression,
    feature: Option<&Feature>,
    property: &str,
) -> Result<f64> {
    match expr.evaluate(feature) {
        Value::Number(n) => check_finite(n, property),
        other => Err(type_error(property, "a number", other.kind().name())),
    }
}

/// Evaluate an optional string slot.
pub(crate) fn eval_optional_string(
    expr: Option<&Expression>,
    feature: Option<&Feature>,
    property: &str,
) -> Result<Option<String>> {
    expr.map(|e| eval_string(e, feature, property)).transpose()
}

/// Evaluate an optional number slot.
pub(crate) fn eval_optional_number(
    expr: Option<&Expression>,
    feature: Option<&Feature>,
    property: &str,
) -> Result<Option<f64>> {
    expr.map(|e| eval_number(e, feature, property)).transpose()
}

/// Reject NaN and infinities.
pub(crate) fn check_finite(n: f64, property: &str) -> Result<f64> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(type_error(property, "a finite number", &n.to_string()))
    }
}

/// Either a fill or a complete stroke must be present.
pub(crate) fn check_fill_or_stroke(
    kind: &str,
    has_fill: bool,
    has_stroke_colour: bool,
    has_stroke_width: bool,
) -> Result<()> {
    if has_fill || (has_stroke_colour && has_stroke_width) {
        Ok(())
    } else {
        Err(StyleError::configuration(
            format!("{} needs fillColor or both strokeColor and strokeWidth", kind),
            "Set fillColor, or set strokeColor and/or strokeWidth (the other is defaulted)",
        ))
    }
}

fn type_error(property: &str, expected: &str, found: &str) -> StyleError {
    StyleError::TypeValidation {
        property: property.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}
