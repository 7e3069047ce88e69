//! Symbolizers and the literals they resolve to.
//!
//! A symbolizer holds one [`Expression`](crate::types::Expression) per
//! visual property. Calling [`Symbolizer::create_literal`] evaluates every
//! expression against a feature, checks the resulting types and returns an
//! immutable literal, or an error. There are no partial results.
//!
//! Symbolizers are read-only after construction, so one instance can be
//! shared between threads and evaluated concurrently.

mod any;
mod change;
mod defaults;
mod line;
mod polygon;
pub(crate) mod resolve;
mod shape;

pub use any::{AnyLiteral, AnySymbolizer, SymbolizerKind, SymbolizerOptions};
pub use change::ChangeTracker;
pub use defaults::{
    DEFAULT_FILL_COLOR, DEFAULT_OPACITY, DEFAULT_SHAPE_SIZE, DEFAULT_STROKE_COLOR,
    DEFAULT_STROKE_WIDTH, LINE_DEFAULTS, POLYGON_DEFAULTS, SHAPE_DEFAULTS,
};
pub use line::{Line, LineLiteral, LineOptions};
pub use polygon::{
    validate_polygon_literal, validate_polygon_options, Polygon, PolygonLiteral, PolygonOptions,
};
pub use shape::{validate_shape_options, Shape, ShapeLiteral, ShapeOptions, ShapeType};

use std::fmt;

use crate::error::Result;
use crate::types::Feature;

/// A resolved, render-ready style value.
pub trait SymbolizerLiteral: fmt::Debug + Clone {
    /// Value equality over every field. Used to skip unchanged re-renders.
    fn equals(&self, other: &Self) -> bool;
}

/// A style definition that can be evaluated per feature.
pub trait Symbolizer {
    type Literal: SymbolizerLiteral;

    /// Evaluate against a feature (or none, for feature-independent styles).
    fn create_literal(&self, feature: Option<&Feature>) -> Result<Self::Literal>;
}
