//! mapstyle - Per-feature style evaluation for vector map rendering
//!
//! A symbolizer holds a constant or an expression for each visual property
//! (fill colour, stroke colour, stroke width, opacity). Evaluating it
//! against a map feature yields an immutable, validated literal that a
//! renderer can draw and compare for change detection.

pub mod cli;
pub mod document;
pub mod error;
pub mod output;
pub mod style;
pub mod types;
pub mod validation;

pub use document::{
    load_style_file, parse_style_document, Rule, RuleSpec, StyleDocument, Stylesheet,
};
pub use error::{Result, StyleError};
pub use style::{
    AnyLiteral, AnySymbolizer, ChangeTracker, Line, LineLiteral, LineOptions, Polygon,
    PolygonLiteral, PolygonOptions, Shape, ShapeLiteral, ShapeOptions, ShapeType, Symbolizer,
    SymbolizerKind, SymbolizerLiteral, SymbolizerOptions, POLYGON_DEFAULTS,
};
pub use types::{parse_features, Colour, Expression, Feature, Value, ValueKind, ValueOrExpression};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
