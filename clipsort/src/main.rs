// clipsort/src/main.rs
//! clipsort entry point.
//!
//! Parses arguments, sets up logging and dispatches to a command.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use clipsort::cli::{Cli, Commands};
use clipsort::commands::{classify, rules};
use clipsort::logger;
use clipsort::ui::output_format::error_msg;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Classify(cmd) => classify::handle_classify(cmd, cli.quiet),
        Commands::Rules(cmd) => rules::handle_rules(cmd),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    if let Err(e) = run(cli) {
        error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
}
