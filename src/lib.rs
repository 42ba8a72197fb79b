pub mod cli;
pub mod compile;
pub mod config;
pub mod driver;
pub mod logging;
pub mod names;
pub mod report;
pub mod table;

use anyhow::Result;
use cli::{BuildArgs, Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => driver::build(&args),
        Commands::Compile(args) => driver::compile(&args),
    }
}
