//! Core value types for mapstyle.
//!
//! This module contains the types symbolizers are built from:
//! - `Value` - dynamically typed expression results
//! - `Feature` - the opaque map entity being styled
//! - `Expression` / `ValueOrExpression` - deferred property values
//! - `Colour` - hex colour parsing for constant checks

mod colour;
mod expr;
mod feature;
mod value;

pub use colour::Colour;
pub use expr::{Computed, Expression, ValueOrExpression};
pub use feature::{parse_features, Feature};
pub use value::{Value, ValueKind};
