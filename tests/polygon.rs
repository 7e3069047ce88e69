//! End-to-end behaviour of the polygon symbolizer.

use std::sync::Arc;
use std::thread;

use mapstyle::{
    Expression, Feature, Polygon, PolygonLiteral, PolygonOptions, StyleError, Symbolizer,
    SymbolizerLiteral, Value,
};
use pretty_assertions::assert_eq;

fn literal(options: PolygonOptions) -> PolygonLiteral {
    Polygon::new(options).unwrap().create_literal(None).unwrap()
}

fn expected(
    fill: Option<&str>,
    stroke: Option<&str>,
    width: Option<f64>,
    opacity: f64,
) -> PolygonLiteral {
    PolygonLiteral::new(
        fill.map(str::to_string),
        stroke.map(str::to_string),
        width,
        opacity,
    )
    .unwrap()
}

#[test]
fn fill_with_opacity() {
    let got = literal(PolygonOptions::new().with_fill_color("#ff0000").with_opacity(0.5));
    assert_eq!(got, expected(Some("#ff0000"), None, None, 0.5));
}

#[test]
fn stroke_colour_only_defaults_width_and_opacity() {
    let got = literal(PolygonOptions::new().with_stroke_color("#000000"));
    assert_eq!(got, expected(None, Some("#000000"), Some(1.5), 0.75));
}

#[test]
fn stroke_width_only_defaults_colour() {
    let got = literal(PolygonOptions::new().with_stroke_width(2.0));
    assert_eq!(got, expected(None, Some("#696969"), Some(2.0), 0.75));
}

#[test]
fn fill_and_stroke() {
    let got = literal(
        PolygonOptions::new()
            .with_fill_color("#ffffff")
            .with_stroke_color("#111111")
            .with_stroke_width(0.5),
    );
    assert_eq!(got, expected(Some("#ffffff"), Some("#111111"), Some(0.5), 0.75));
}

#[test]
fn empty_options_fail() {
    let err = Polygon::new(PolygonOptions::new()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Configuration error: polygon needs fillColor or both strokeColor and strokeWidth"
    );
}

#[test]
fn text_stroke_width_fails_naming_property() {
    let polygon = Polygon::new(
        PolygonOptions::new().with_stroke_width(Expression::attribute("width")),
    )
    .unwrap();
    let feature = Feature::new().with_property("width", "wide");

    let err = polygon.create_literal(Some(&feature)).unwrap_err();
    assert!(matches!(err, StyleError::TypeValidation { .. }));
    insta::assert_snapshot!(
        err.to_string(),
        @"Type validation error: strokeWidth must be a number, got string"
    );
}

#[test]
fn expressions_follow_feature_data() {
    let polygon = Polygon::new(
        PolygonOptions::new()
            .with_fill_color(Expression::attribute("colour"))
            .with_opacity(Expression::computed("by-rank", |feature| {
                let rank = feature
                    .and_then(|f| f.get("rank"))
                    .and_then(Value::as_f64)
                    .unwrap_or(0.0);
                Value::Number(if rank > 2.0 { 1.0 } else { 0.25 })
            })),
    )
    .unwrap();

    let major = Feature::new()
        .with_property("colour", "#aa0000")
        .with_property("rank", 5.0);
    let minor = Feature::new()
        .with_property("colour", "#00aa00")
        .with_property("rank", 1.0);

    assert_eq!(
        polygon.create_literal(Some(&major)).unwrap(),
        expected(Some("#aa0000"), None, None, 1.0)
    );
    assert_eq!(
        polygon.create_literal(Some(&minor)).unwrap(),
        expected(Some("#00aa00"), None, None, 0.25)
    );
}

#[test]
fn equals_is_reflexive_symmetric_and_field_sensitive() {
    let base = expected(Some("#fff"), Some("#000"), Some(1.0), 0.5);
    let same = expected(Some("#fff"), Some("#000"), Some(1.0), 0.5);

    assert!(base.equals(&base));
    assert!(base.equals(&same) && same.equals(&base));

    let variants = [
        expected(Some("#eee"), Some("#000"), Some(1.0), 0.5),
        expected(None, Some("#000"), Some(1.0), 0.5),
        expected(Some("#fff"), Some("#111"), Some(1.0), 0.5),
        expected(Some("#fff"), Some("#000"), Some(2.0), 0.5),
        expected(Some("#fff"), None, None, 0.5),
        expected(Some("#fff"), Some("#000"), Some(1.0), 0.6),
    ];
    for other in &variants {
        assert!(!base.equals(other), "{:?} should differ", other);
        assert!(!other.equals(&base));
    }
}

#[test]
fn repeated_evaluation_yields_equal_literals() {
    let polygon = Polygon::new(PolygonOptions::new().with_fill_color("#123456")).unwrap();
    let a = polygon.create_literal(None).unwrap();
    let b = polygon.create_literal(None).unwrap();
    assert!(a.equals(&b));
}

#[test]
fn shared_symbolizer_evaluates_across_threads() {
    let polygon = Arc::new(
        Polygon::new(PolygonOptions::new().with_fill_color(Expression::attribute("colour")))
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let polygon = Arc::clone(&polygon);
            thread::spawn(move || {
                let colour = format!("#00000{}", i);
                let feature = Feature::new().with_property("colour", colour.as_str());
                let literal = polygon.create_literal(Some(&feature)).unwrap();
                assert_eq!(literal.fill_color(), Some(colour.as_str()));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
