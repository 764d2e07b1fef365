// clipsort/src/commands/rules.rs
//! The `rules` command: lists the rule tables a classifier would run.

use anyhow::Result;
use std::io::{self, Write};

use clipsort_core::ClassifierConfig;

use crate::cli::RulesCommand;
use crate::commands::load_active_config;
use crate::ui::tables;

/// Writes both rule tables to `writer`.
pub fn run_rules<W: Write>(config: &ClassifierConfig, writer: &mut W) -> Result<()> {
    writeln!(writer, "Scoring rules:\n{}", tables::scoring_rules_table(config))?;
    writeln!(writer, "\nLanguage rules (ties go to the earlier entry):\n{}", tables::language_rules_table(config))?;
    Ok(())
}

/// Entry point for `clipsort rules`.
pub fn handle_rules(cmd: RulesCommand) -> Result<()> {
    let config = load_active_config(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run_rules(&config, &mut writer)?;
    writer.flush()?;
    Ok(())
}
