//! Binary entry point for the shelly renderer.
use anyhow::Result;
use clap::Parser;

use shelly_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    match args.command {
        cli::Command::Render(opts) => commands::render::run(&args.global, &opts),
        cli::Command::Check(opts) => commands::check::run(&args.global, &opts),
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
