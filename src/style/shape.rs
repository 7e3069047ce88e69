//! Shape symbolizer for point features.
//!
//! Draws a marker of a given size at each point. Fill and stroke follow
//! the polygon rules: at least one is required and the stroke pair is
//! defaulted together.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Expression, Feature, ValueOrExpression};

use super::defaults::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, SHAPE_DEFAULTS};
use super::resolve;
use super::{Symbolizer, SymbolizerLiteral};

/// Marker geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Circle,
}

/// Construction options for a [`Shape`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShapeOptions {
    #[serde(default, rename = "type")]
    pub shape_type: Option<ShapeType>,
    #[serde(default)]
    pub size: Option<ValueOrExpression<f64>>,
    #[serde(default)]
    pub fill_color: Option<ValueOrExpression<String>>,
    #[serde(default)]
    pub stroke_color: Option<ValueOrExpression<String>>,
    #[serde(default)]
    pub stroke_width: Option<ValueOrExpression<f64>>,
    #[serde(default)]
    pub opacity: Option<ValueOrExpression<f64>>,
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, value: impl Into<ValueOrExpression<f64>>) -> Self {
        self.size = Some(value.into());
        self
    }

    pub fn with_fill_color(mut self, value: impl Into<ValueOrExpression<String>>) -> Self {
        self.fill_color = Some(value.into());
        self
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

    /// Check if any stroke property was supplied.
    pub fn has_stroke(&self) -> bool {
        self.stroke_color.is_some() || self.stroke_width.is_some()
    }
}

/// Check that shape options describe a fill or a stroke.
pub fn validate_shape_options(options: &ShapeOptions) -> Result<()> {
    resolve::check_fill_or_stroke(
        "shape",
        options.fill_color.is_some(),
        options.has_stroke(),
        options.has_stroke(),
    )
}

/// A point marker style.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    shape_type: ShapeType,
    size: Expression,
    fill_color: Option<Expression>,
    stroke_color: Option<Expression>,
    stroke_width: Option<Expression>,
    opacity: Expression,
}

impl Shape {
    pub fn new(options: ShapeOptions) -> Result<Self> {
        Self::with_defaults(options, &SHAPE_DEFAULTS)
    }

    pub fn with_defaults(options: ShapeOptions, defaults: &ShapeLiteral) -> Result<Self> {
        validate_shape_options(&options)?;

        let (stroke_color, stroke_width) = resolve::stroke_pair(
            options.stroke_color,
            options.stroke_width,
            defaults.stroke_color().unwrap_or(DEFAULT_STROKE_COLOR),
            defaults.stroke_width().unwrap_or(DEFAULT_STROKE_WIDTH),
        );

        Ok(Self {
            shape_type: options.shape_type.unwrap_or(defaults.shape_type()),
            size: resolve::or_default(options.size, defaults.size()),
            fill_color: resolve::optional(options.fill_color),
            stroke_color,
            stroke_width,
            opacity: resolve::or_default(options.opacity, defaults.opacity()),
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }
}

impl Symbolizer for Shape {
    type Literal = ShapeLiteral;

    fn create_literal(&self, feature: Option<&Feature>) -> Result<ShapeLiteral> {
        let size = resolve::eval_number(&self.size, feature, "size")?;
        let fill_color =
            resolve::eval_optional_string(self.fill_color.as_ref(), feature, "fillColor")?;
        let stroke_color =
            resolve::eval_optional_string(self.stroke_color.as_ref(), feature, "strokeColor")?;
        let stroke_width =
            resolve::eval_optional_number(self.stroke_width.as_ref(), feature, "strokeWidth")?;
        let opacity = resolve::eval_number(&self.opacity, feature, "opacity")?;

        ShapeLiteral::new(
            self.shape_type,
            size,
            fill_color,
            stroke_color,
            stroke_width,
            opacity,
        )
    }
}

/// Fully resolved point marker style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeLiteral {
    #[serde(rename = "type")]
    pub(super) shape_type: ShapeType,
    pub(super) size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) stroke_width: Option<f64>,
    pub(super) opacity: f64,
}

impl ShapeLiteral {
    pub fn new(
        shape_type: ShapeType,
        size: f64,
        fill_color: Option<String>,
        stroke_color: Option<String>,
        stroke_width: Option<f64>,
        opacity: f64,
    ) -> Result<Self> {
        resolve::check_fill_or_stroke(
            "shape",
            fill_color.is_some(),
            stroke_color.is_some(),
            stroke_width.is_some(),
        )?;
        resolve::check_finite(size, "size")?;
        if let Some(width) = stroke_width {
            resolve::check_finite(width, "strokeWidth")?;
        }
        resolve::check_finite(opacity, "opacity")?;

        Ok(Self {
            shape_type,
            size,
            fill_color,
            stroke_color,
            stroke_width,
            opacity,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn fill_color(&self) -> Option<&str> {
        self.fill_color.as_deref()
    }

    pub fn stroke_color(&self) -> Option<&str> {
        self.stroke_color.as_deref()
    }

    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl SymbolizerLiteral for ShapeLiteral {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}
