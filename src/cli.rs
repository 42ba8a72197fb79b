use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "namelist")]
#[command(about = "Compile sorted name lists from comma-separated name records", long_about = None)]
pub struct Cli {
    /// Defaults to `build` with the built-in girls/boys pairs.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile the girls and boys lists and print the names they share.
    Build(BuildArgs),
    /// Compile a single name list.
    Compile(CompileArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// YAML file naming the source and target of each list.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write a JSON build report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Log progress and print a summary to stderr.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Comma-separated input file, or a directory of them.
    #[arg(long)]
    pub source: PathBuf,
    /// Output word list.
    #[arg(long)]
    pub target: PathBuf,
    /// Log progress to stderr.
    #[arg(long)]
    pub verbose: bool,
}
