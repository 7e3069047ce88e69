//! Defaults command implementation.

use std::io;

use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::style::{
    LineLiteral, PolygonLiteral, ShapeLiteral, LINE_DEFAULTS, POLYGON_DEFAULTS, SHAPE_DEFAULTS,
};

/// Print the built-in default literals as JSON
#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Serialize)]
struct Defaults<'a> {
    polygon: &'a PolygonLiteral,
    line: &'a LineLiteral,
    shape: &'a ShapeLiteral,
}

pub fn run(args: DefaultsArgs) -> Result<()> {
    let defaults = Defaults {
        polygon: &POLYGON_DEFAULTS,
        line: &LINE_DEFAULTS,
        shape: &SHAPE_DEFAULTS,
    };

    let json = if args.compact {
        serde_json::to_string(&defaults)
    } else {
        serde_json::to_string_pretty(&defaults)
    }
    .map_err(io::Error::from)?;

    println!("{}", json);
    Ok(())
}
