//! Polygon symbolizer: fill, stroke and opacity.
//!
//! A polygon needs a fill, a stroke, or both. Stroke colour and width are
//! defaulted together: giving either one turns the stroke on and the other
//! comes from the defaults.
//!
//! # Example
//!
//! ```
//! use mapstyle::style::{Polygon, PolygonOptions, Symbolizer};
//!
//! let polygon = Polygon::new(PolygonOptions::new().with_stroke_color("#000000")).unwrap();
//! let literal = polygon.create_literal(None).unwrap();
//!
//! assert_eq!(literal.stroke_color(), Some("#000000"));
//! assert_eq!(literal.stroke_width(), Some(1.5));
//! assert_eq!(literal.opacity(), 0.75);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Expression, Feature, ValueOrExpression};

use super::defaults::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, POLYGON_DEFAULTS};
use super::resolve;
use super::{Symbolizer, SymbolizerLiteral};

/// Construction options for a [`Polygon`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PolygonOptions {
    #[serde(default)]
    pub fill_color: Option<ValueOrExpression<String>>,
    #[serde(default)]
    pub stroke_color: Option<ValueOrExpression<String>>,
    #[serde(default)]
    pub stroke_width: Option<ValueOrExpression<f64>>,
    #[serde(default)]
    pub opacity: Option<ValueOrExpression<f64>>,
}

impl PolygonOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill colour.
    pub fn with_fill_color(mut self, value: impl Into<ValueOrExpression<String>>) -> Self {
        self.fill_color = Some(value.into());
        self
    }

    /// Set the stroke colour.
    pub fn with_stroke_color(mut self, value: impl Into<ValueOrExpression<String>>) -> Self {
        self.stroke_color = Some(value.into());
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, value: impl Into<ValueOrExpression<f64>>) -> Self {
        self.stroke_width = Some(value.into());
        self
    }

    /// Set the opacity.
    pub fn with_opacity(mut self, value: impl Into<ValueOrExpression<f64>>) -> Self {
        self.opacity = Some(value.into());
        self
    }

    /// Check if any stroke property was supplied.
    pub fn has_stroke(&self) -> bool {
        self.stroke_color.is_some() || self.stroke_width.is_some()
    }
}

/// Check that polygon options describe a fill or a stroke.
///
/// Because the stroke pair is defaulted together, one supplied stroke
/// property is enough.
pub fn validate_polygon_options(options: &PolygonOptions) -> Result<()> {
    resolve::check_fill_or_stroke(
        "polygon",
        options.fill_color.is_some(),
        options.has_stroke(),
        options.has_stroke(),
    )
}

/// Check the resolved fields of a polygon literal.
pub fn validate_polygon_literal(
    fill_color: Option<&str>,
    stroke_color: Option<&str>,
    stroke_width: Option<f64>,
    opacity: f64,
) -> Result<()> {
    resolve::check_fill_or_stroke(
        "polygon",
        fill_color.is_some(),
        stroke_color.is_some(),
        stroke_width.is_some(),
    )?;
    if let Some(width) = stroke_width {
        resolve::check_finite(width, "strokeWidth")?;
    }
    resolve::check_finite(opacity, "opacity")?;
    Ok(())
}

/// A polygon style with one expression per property.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    fill_color: Option<Expression>,
    stroke_color: Option<Expression>,
    stroke_width: Option<Expression>,
    opacity: Expression,
}

impl Polygon {
    /// Build a polygon symbolizer using the process-wide defaults.
    pub fn new(options: PolygonOptions) -> Result<Self> {
        Self::with_defaults(options, &POLYGON_DEFAULTS)
    }

    /// Build a polygon symbolizer with explicit defaults.
    ///
    /// Defaults with no stroke fall back to the built-in stroke values.
    pub fn with_defaults(options: PolygonOptions, defaults: &PolygonLiteral) -> Result<Self> {
        validate_polygon_options(&options)?;

        let (stroke_color, stroke_width) = resolve::stroke_pair(
            options.stroke_color,
            options.stroke_width,
            defaults.stroke_color().unwrap_or(DEFAULT_STROKE_COLOR),
            defaults.stroke_width().unwrap_or(DEFAULT_STROKE_WIDTH),
        );

        Ok(Self {
            fill_color: resolve::optional(options.fill_color),
            stroke_color,
            stroke_width,
            opacity: resolve::or_default(options.opacity, defaults.opacity()),
        })
    }

    pub fn fill_color(&self) -> Option<&Expression> {
        self.fill_color.as_ref()
    }

    pub fn stroke_color(&self) -> Option<&Expression> {
        self.stroke_color.as_ref()
    }

    pub fn stroke_width(&self) -> Option<&Expression> {
        self.stroke_width.as_ref()
    }

    pub fn opacity(&self) -> &Expression {
        &self.opacity
    }
}

impl Symbolizer for Polygon {
    type Literal = PolygonLiteral;

    fn create_literal(&self, feature: Option<&Feature>) -> Result<PolygonLiteral> {
        let fill_color =
            resolve::eval_optional_string(self.fill_color.as_ref(), feature, "fillColor")?;
        let stroke_color =
            resolve::eval_optional_string(self.stroke_color.as_ref(), feature, "strokeColor")?;
        let stroke_width =
            resolve::eval_optional_number(self.stroke_width.as_ref(), feature, "strokeWidth")?;
        let opacity = resolve::eval_number(&self.opacity, feature, "opacity")?;

        PolygonLiteral::new(fill_color, stroke_color, stroke_width, opacity)
    }
}

/// Fully resolved polygon style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonLiteral {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) stroke_width: Option<f64>,
    pub(super) opacity: f64,
}

impl PolygonLiteral {
    /// Create a literal, checking that it has a fill or a full stroke.
    pub fn new(
        fill_color: Option<String>,
        stroke_color: Option<String>,
        stroke_width: Option<f64>,
        opacity: f64,
    ) -> Result<Self> {
        validate_polygon_literal(
            fill_color.as_deref(),
            stroke_color.as_deref(),
            stroke_width,
            opacity,
        )?;
        Ok(Self {
            fill_color,
            stroke_color,
            stroke_width,
            opacity,
        })
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

impl SymbolizerLiteral for PolygonLiteral {
    fn equals(&self, other: &Self) -> bool {
        self.fill_color == other.fill_color
            && self.stroke_color == other.stroke_color
            && self.stroke_width == other.stroke_width
            && self.opacity == other.opacity
    }
}
