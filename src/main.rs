use clap::Parser;
use namelist::cli::Cli;
use namelist::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
