mod cli;
mod logging;
mod prompt;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_logging(args.verbose);
    run_cli(args)
}
