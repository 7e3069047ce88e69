use clap::Parser;
use miette::Result;
use mapstyle::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval(args) => mapstyle::cli::eval::run(args)?,
        Commands::Defaults(args) => mapstyle::cli::defaults::run(args)?,
        Commands::Validate(args) => mapstyle::cli::validate::run(args)?,
    }

    Ok(())
}
