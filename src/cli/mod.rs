pub mod defaults;
pub mod eval;
pub mod validate;

use clap::{Parser, Subcommand};

/// mapstyle - Per-feature style evaluation for vector maps
#[derive(Parser, Debug)]
#[command(name = "mapstyle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate style rules against features and print literals as JSON
    Eval(eval::EvalArgs),

    /// Print the built-in default literals as JSON
    Defaults(defaults::DefaultsArgs),

    /// Lint style documents without evaluating them
    Validate(validate::ValidateArgs),
}
