//! Line symbolizer: stroke colour, stroke width and opacity.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Expression, Feature, ValueOrExpression};

use super::defaults::LINE_DEFAULTS;
use super::resolve;
use super::{Symbolizer, SymbolizerLiteral};

/// Construction options for a [`Line`]. Every property is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineOptions {
    #[serde(default)]
    pub stroke_color: Option<ValueOrExpression<String>>,
    #[serde(default)]
    pub stroke_width: Option<ValueOrExpression<f64>>,
    #[serde(default)]
    pub opacity: Option<ValueOrExpression<f64>>,
}

impl LineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke_color(mut self, value: impl Into<ValueOrExpression<String>>) -> Self {
        self.stroke_color = Some(value.into());
        self
    }

    pub fn with_stroke_width(mut self, value: impl Into<ValueOrExpression<f64>>) -> Self {
        self.stroke_width = Some(value.into());
        self
    }

    pub fn with_opacity(mut self, value: impl Into<ValueOrExpression<f64>>) -> Self {
        self.opacity = Some(value.into());
        self
    }
}

/// A line style. Each property is defaulted on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    stroke_color: Expression,
    stroke_width: Expression,
    opacity: Expression,
}

impl Line {
    pub fn new(options: LineOptions) -> Self {
        Self::with_defaults(options, &LINE_DEFAULTS)
    }

    pub fn with_defaults(options: LineOptions, defaults: &LineLiteral) -> Self {
        Self {
            stroke_color: resolve::or_default(options.stroke_color, defaults.stroke_color()),
            stroke_width: resolve::or_default(options.stroke_width, defaults.stroke_width()),
            opacity: resolve::or_default(options.opacity, defaults.opacity()),
        }
    }
}

impl Symbolizer for Line {
    type Literal = LineLiteral;

    fn create_literal(&self, feature: Option<&Feature>) -> Result<LineLiteral> {
        let stroke_color = resolve::eval_string(&self.stroke_color, feature, "strokeColor")?;
        let stroke_width = resolve::eval_number(&self.stroke_width, feature, "strokeWidth")?;
        let opacity = resolve::eval_number(&self.opacity, feature, "opacity")?;

        LineLiteral::new(stroke_color, stroke_width, opacity)
    }
}

/// Fully resolved line style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineLiteral {
    pub(super) stroke_color: String,
    pub(super) stroke_width: f64,
    pub(super) opacity: f64,
}

impl LineLiteral {
    pub fn new(stroke_color: String, stroke_width: f64, opacity: f64) -> Result<Self> {
        resolve::check_finite(stroke_width, "strokeWidth")?;
        resolve::check_finite(opacity, "opacity")?;
        Ok(Self {
            stroke_color,
            stroke_width,
            opacity,
        })
    }

    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl SymbolizerLiteral for LineLiteral {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}
