//! Process-wide fallback literals.
//!
//! Each symbolizer kind has one defaults literal, built on first access
//! and never mutated afterwards. Symbolizer constructors read from these
//! unless handed explicit defaults.

use once_cell::sync::Lazy;

use super::line::LineLiteral;
use super::polygon::PolygonLiteral;
use super::shape::{ShapeLiteral, ShapeType};

pub const DEFAULT_FILL_COLOR: &str = "#ffffff";
pub const DEFAULT_STROKE_COLOR: &str = "#696969";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;
pub const DEFAULT_OPACITY: f64 = 0.75;
pub const DEFAULT_SHAPE_SIZE: f64 = 5.0;

pub static POLYGON_DEFAULTS: Lazy<PolygonLiteral> = Lazy::new(|| PolygonLiteral {
    fill_color: Some(DEFAULT_FILL_COLOR.to_string()),
    stroke_color: Some(DEFAULT_STROKE_COLOR.to_string()),
    stroke_width: Some(DEFAULT_STROKE_WIDTH),
    opacity: DEFAULT_OPACITY,
});

pub static LINE_DEFAULTS: Lazy<LineLiteral> = Lazy::new(|| LineLiteral {
    stroke_color: DEFAULT_STROKE_COLOR.to_string(),
    stroke_width: DEFAULT_STROKE_WIDTH,
    opacity: DEFAULT_OPACITY,
});

pub static SHAPE_DEFAULTS: Lazy<ShapeLiteral> = Lazy::new(|| ShapeLiteral {
    shape_type: ShapeType::Circle,
    size: DEFAULT_SHAPE_SIZE,
    fill_color: Some(DEFAULT_FILL_COLOR.to_string()),
    stroke_color: Some(DEFAULT_STROKE_COLOR.to_string()),
    stroke_width: Some(DEFAULT_STROKE_WIDTH),
    opacity: DEFAULT_OPACITY,
});
