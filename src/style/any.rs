//! Closed sets of symbolizer and literal kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Feature;

use super::line::{Line, LineLiteral, LineOptions};
use super::polygon::{Polygon, PolygonLiteral, PolygonOptions};
use super::shape::{Shape, ShapeLiteral, ShapeOptions};
use super::{Symbolizer, SymbolizerLiteral};

/// The kind of a symbolizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolizerKind {
    Polygon,
    Line,
    Shape,
}

impl SymbolizerKind {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolizerKind::Polygon => "polygon",
            SymbolizerKind::Line => "line",
            SymbolizerKind::Shape => "shape",
        }
    }
}

impl fmt::Display for SymbolizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options for any symbolizer kind, tagged by `kind` in style documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SymbolizerOptions {
    Polygon(PolygonOptions),
    Line(LineOptions),
    Shape(ShapeOptions),
}

impl SymbolizerOptions {
    pub fn kind(&self) -> SymbolizerKind {
        match self {
            SymbolizerOptions::Polygon(_) => SymbolizerKind::Polygon,
            SymbolizerOptions::Line(_) => SymbolizerKind::Line,
            SymbolizerOptions::Shape(_) => SymbolizerKind::Shape,
        }
    }

    /// Construct the symbolizer with the process-wide defaults.
    pub fn build(self) -> Result<AnySymbolizer> {
        Ok(match self {
            SymbolizerOptions::Polygon(options) => AnySymbolizer::Polygon(Polygon::new(options)?),
            SymbolizerOptions::Line(options) => AnySymbolizer::Line(Line::new(options)),
            SymbolizerOptions::Shape(options) => AnySymbolizer::Shape(Shape::new(options)?),
        })
    }
}

/// A symbolizer of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySymbolizer {
    Polygon(Polygon),
    Line(Line),
    Shape(Shape),
}

impl AnySymbolizer {
    pub fn kind(&self) -> SymbolizerKind {
        match self {
            AnySymbolizer::Polygon(_) => SymbolizerKind::Polygon,
            AnySymbolizer::Line(_) => SymbolizerKind::Line,
            AnySymbolizer::Shape(_) => SymbolizerKind::Shape,
        }
    }
}

impl Symbolizer for AnySymbolizer {
    type Literal = AnyLiteral;

    fn create_literal(&self, feature: Option<&Feature>) -> Result<AnyLiteral> {
        Ok(match self {
            AnySymbolizer::Polygon(s) => AnyLiteral::Polygon(s.create_literal(feature)?),
            AnySymbolizer::Line(s) => AnyLiteral::Line(s.create_literal(feature)?),
            AnySymbolizer::Shape(s) => AnyLiteral::Shape(s.create_literal(feature)?),
        })
    }
}

impl From<Polygon> for AnySymbolizer {
    fn from(s: Polygon) -> Self {
        AnySymbolizer::Polygon(s)
    }
}

impl From<Line> for AnySymbolizer {
    fn from(s: Line) -> Self {
        AnySymbolizer::Line(s)
    }
}

impl From<Shape> for AnySymbolizer {
    fn from(s: Shape) -> Self {
        AnySymbolizer::Shape(s)
    }
}

/// A resolved literal of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyLiteral {
    Polygon(PolygonLiteral),
    Line(LineLiteral),
    Shape(ShapeLiteral),
}

impl AnyLiteral {
    pub fn kind(&self) -> SymbolizerKind {
        match self {
            AnyLiteral::Polygon(_) => SymbolizerKind::Polygon,
            AnyLiteral::Line(_) => SymbolizerKind::Line,
            AnyLiteral::Shape(_) => SymbolizerKind::Shape,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonLiteral> {
        match self {
            AnyLiteral::Polygon(l) => Some(l),
            _ => None,
        }
    }
}

impl SymbolizerLiteral for AnyLiteral {
    /// Literals of different kinds are never equal.
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyLiteral::Polygon(a), AnyLiteral::Polygon(b)) => a.equals(b),
            (AnyLiteral::Line(a), AnyLiteral::Line(b)) => a.equals(b),
            (AnyLiteral::Shape(a), AnyLiteral::Shape(b)) => a.equals(b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_options() {
        let options: SymbolizerOptions =
            serde_yaml::from_str("kind: polygon\nfillColor: \"#ff0000\"\nopacity: 0.5").unwrap();
        assert_eq!(options.kind(), SymbolizerKind::Polygon);

        let literal = options.build().unwrap().create_literal(None).unwrap();
        let polygon = literal.as_polygon().unwrap();
        assert_eq!(polygon.fill_color(), Some("#ff0000"));
        assert_eq!(polygon.opacity(), 0.5);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: std::result::Result<SymbolizerOptions, _> =
            serde_yaml::from_str("kind: text\nfillColor: \"#ff0000\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_misspelled_property_rejected() {
        for source in [
            "kind: polygon\nfillColor: \"#fff\"\nstrokeWdith: 3",
            "kind: line\nstrokeColour: \"#000\"",
            "kind: shape\nfillColor: \"#fff\"\nradius: 4",
        ] {
            let result: std::result::Result<SymbolizerOptions, _> = serde_yaml::from_str(source);
            assert!(result.is_err(), "accepted {:?}", source);
        }
    }

    #[test]
    fn test_equals_across_kinds() {
        let polygon = SymbolizerOptions::Polygon(PolygonOptions::new().with_stroke_width(1.5))
            .build()
            .unwrap()
            .create_literal(None)
            .unwrap();
        let line = SymbolizerOptions::Line(LineOptions::new())
            .build()
            .unwrap()
            .create_literal(None)
            .unwrap();

        assert!(polygon.equals(&polygon.clone()));
        assert!(!polygon.equals(&line));
        assert!(!line.equals(&polygon));
    }

    #[test]
    fn test_serialize_tagged_literal() {
        let literal = AnySymbolizer::from(Line::new(LineOptions::new()))
            .create_literal(None)
            .unwrap();
        let json = serde_json::to_value(&literal).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "line",
                "strokeColor": "#696969",
                "strokeWidth": 1.5,
                "opacity": 0.75
            })
        );
    }
}
