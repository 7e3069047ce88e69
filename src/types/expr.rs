//! Style expressions and their evaluation against features.
//!
//! An expression is one of:
//! - a literal value, ignoring the feature
//! - an attribute lookup: `{ attribute: density }`
//! - a computed rule supplied by the host application as a closure
//!
//! Evaluation never fails; a missing feature or attribute yields
//! [`Value::Null`] and it is up to the symbolizer to reject it.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use super::{Feature, Value};

type Rule = dyn Fn(Option<&Feature>) -> Value + Send + Sync;

/// A deferred computation producing a [`Value`] for a feature.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ExpressionSpec")]
pub enum Expression {
    /// A constant value: `{ literal: "#ff0000" }`
    Literal(Value),
    /// A feature property lookup: `{ attribute: colour }`
    Attribute(String),
    /// A host-supplied rule.
    Computed(Computed),
}

/// A named closure evaluated against a feature.
#[derive(Clone)]
pub struct Computed {
    name: String,
    rule: Arc<Rule>,
}

impl Computed {
    /// Name given to the rule at creation.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed").field("name", &self.name).finish()
    }
}

impl Expression {
    /// Create a literal expression.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    /// Create an attribute lookup expression.
    pub fn attribute(name: impl Into<String>) -> Self {
        Expression::Attribute(name.into())
    }

    /// Create a computed expression from a closure.
    pub fn computed<F>(name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(Option<&Feature>) -> Value + Send + Sync + 'static,
    {
        Expression::Computed(Computed {
            name: name.into(),
            rule: Arc::new(rule),
        })
    }

    /// Evaluate against a feature.
    pub fn evaluate(&self, feature: Option<&Feature>) -> Value {
        match self {
            Expression::Literal(value) => value.clone(),
            Expression::Attribute(name) => feature
                .and_then(|f| f.get(name))
                .cloned()
                .unwrap_or_default(),
            Expression::Computed(computed) => (computed.rule)(feature),
        }
    }

    /// Get the constant value if this is a literal.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expression::Literal(value) => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expression::Literal(a), Expression::Literal(b)) => a == b,
            (Expression::Attribute(a), Expression::Attribute(b)) => a == b,
            (Expression::Computed(a), Expression::Computed(b)) => Arc::ptr_eq(&a.rule, &b.rule),
            _ => false,
        }
    }
}

/// Serialized form of an expression in style documents.
#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum ExpressionSpec {
    Literal(Value),
    Attribute(String),
}

impl From<ExpressionSpec> for Expression {
    fn from(spec: ExpressionSpec) -> Self {
        match spec {
            ExpressionSpec::Literal(value) => Expression::Literal(value),
            ExpressionSpec::Attribute(name) => Expression::Attribute(name),
        }
    }
}

/// A property setting as supplied by the caller: either a raw constant
/// or an expression. Resolved once into an [`Expression`] when a
/// symbolizer is built.
///
/// In style documents a constant of the wrong type is kept as a literal
/// expression, so it is reported as a type error for its property when
/// evaluated instead of failing the whole document parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueOrExpression<T> {
    Constant(T),
    Expression(Expression),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Setting {
    Expression(Expression),
    Constant(Value),
}

impl<'de, T> Deserialize<'de> for ValueOrExpression<T>
where
    T: TryFrom<Value, Error = Value>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Setting::deserialize(deserializer)? {
            Setting::Expression(expr) => ValueOrExpression::Expression(expr),
            Setting::Constant(value) => match T::try_from(value) {
                Ok(constant) => ValueOrExpression::Constant(constant),
                Err(value) => ValueOrExpression::Expression(Expression::Literal(value)),
            },
        })
    }
}

impl<T: Into<Value>> ValueOrExpression<T> {
    /// Resolve into an expression, wrapping constants as literals.
    pub fn into_expression(self) -> Expression {
        match self {
            ValueOrExpression::Constant(value) => Expression::Literal(value.into()),
            ValueOrExpression::Expression(expr) => expr,
        }
    }
}

impl<T> ValueOrExpression<T> {
    /// Get the raw constant, if one was supplied.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            ValueOrExpression::Constant(value) => Some(value),
            ValueOrExpression::Expression(_) => None,
        }
    }

    /// Check if the setting evaluates the same for every feature.
    pub fn is_literal(&self) -> bool {
        match self {
            ValueOrExpression::Constant(_) => true,
            ValueOrExpression::Expression(expr) => expr.as_literal().is_some(),
        }
    }
}

impl<T> From<Expression> for ValueOrExpression<T> {
    fn from(expr: Expression) -> Self {
        ValueOrExpression::Expression(expr)
    }
}

impl From<&str> for ValueOrExpression<String> {
    fn from(s: &str) -> Self {
        ValueOrExpression::Constant(s.to_string())
    }
}

impl From<String> for ValueOrExpression<String> {
    fn from(s: String) -> Self {
        ValueOrExpression::Constant(s)
    }
}

impl From<f64> for ValueOrExpression<f64> {
    fn from(n: f64) -> Self {
        ValueOrExpression::Constant(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_ignores_feature() {
        let expr = Expression::literal("#ff0000");
        let feature = Feature::new().with_property("colour", "#00ff00");

        assert_eq!(expr.evaluate(None), Value::from("#ff0000"));
        assert_eq!(expr.evaluate(Some(&feature)), Value::from("#ff0000"));
    }

    #[test]
    fn test_attribute_lookup() {
        let expr = Expression::attribute("width");
        let feature = Feature::new().with_property("width", 4.0);

        assert_eq!(expr.evaluate(Some(&feature)), Value::Number(4.0));
        assert_eq!(expr.evaluate(Some(&Feature::new())), Value::Null);
        assert_eq!(expr.evaluate(None), Value::Null);
    }

    #[test]
    fn test_computed() {
        let expr = Expression::computed("double-width", |feature| {
            let width = feature
                .and_then(|f| f.get("width"))
                .and_then(Value::as_f64)
                .unwrap_or(1.0);
            Value::Number(width * 2.0)
        });
        let feature = Feature::new().with_property("width", 3.0);

        assert_eq!(expr.evaluate(Some(&feature)), Value::Number(6.0));
        assert_eq!(expr.evaluate(None), Value::Number(2.0));
    }

    #[test]
    fn test_computed_equality_is_identity() {
        let a = Expression::computed("a", |_| Value::Null);
        let b = Expression::computed("a", |_| Value::Null);

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_value_or_expression_into_expression() {
        let constant: ValueOrExpression<f64> = 1.5.into();
        assert_eq!(constant.into_expression(), Expression::literal(1.5));

        let expr: ValueOrExpression<f64> = Expression::attribute("w").into();
        assert_eq!(expr.into_expression(), Expression::attribute("w"));
    }

    #[test]
    fn test_deserialize_value_or_expression() {
        let raw: ValueOrExpression<String> = serde_yaml::from_str("\"#fff\"").unwrap();
        assert_eq!(raw.as_constant().map(String::as_str), Some("#fff"));

        let attr: ValueOrExpression<String> = serde_yaml::from_str("attribute: colour").unwrap();
        assert_eq!(attr, ValueOrExpression::Expression(Expression::attribute("colour")));

        let lit: ValueOrExpression<f64> = serde_yaml::from_str("literal: 2").unwrap();
        assert_eq!(lit, ValueOrExpression::Expression(Expression::literal(2.0)));
    }

    #[test]
    fn test_deserialize_mistyped_constant_as_literal() {
        let raw: ValueOrExpression<String> = serde_yaml::from_str("5").unwrap();
        assert_eq!(raw, ValueOrExpression::Expression(Expression::literal(5.0)));
        assert!(raw.is_literal());

        let raw: ValueOrExpression<f64> = serde_yaml::from_str("wide").unwrap();
        assert_eq!(raw, ValueOrExpression::Expression(Expression::literal("wide")));
    }

    #[test]
    fn test_is_literal() {
        assert!(ValueOrExpression::from(2.0).is_literal());
        assert!(ValueOrExpression::<f64>::from(Expression::literal(2.0)).is_literal());
        assert!(!ValueOrExpression::<f64>::from(Expression::attribute("w")).is_literal());
    }

    #[test]
    fn test_deserialize_rejects_unknown_expression() {
        let result: Result<ValueOrExpression<f64>, _> = serde_yaml::from_str("lookup: width");
        assert!(result.is_err());
    }
}
