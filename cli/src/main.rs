mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::{classify, groups, summarize};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose);
    match &cli.command {
        Commands::Classify(args) => classify::run(&cli, args),
        Commands::Summarize(args) => summarize::run(&cli, args),
        Commands::Groups(args) => groups::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
