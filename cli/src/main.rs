//! `aclfw` binary: parse arguments, set up logging and run a subcommand.
use std::sync::Arc;

use aclfw_cli::{cli, commands, logging};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    logging::init_subscriber(args.verbose, args.command.name());
    let log = Arc::new(logging::Logger::new(args.command.name()));

    match args.command {
        cli::Command::Template(opts) => commands::template::run(&opts, &*log),
        cli::Command::Apply(opts) => commands::apply::run(&opts, &log),
        cli::Command::Harness(opts) => commands::harness::run(&opts, &log),
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
