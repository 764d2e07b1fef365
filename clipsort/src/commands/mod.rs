// clipsort/src/commands/mod.rs
//! Command implementations and the rule loading they share.

pub mod classify;
pub mod rules;

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use clipsort_core::{merge_rules, user_config_candidate_paths, ClassifierConfig};

/// Picks the user rule file: the explicit path, else the first candidate
/// location that exists.
fn find_user_config(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_candidate_paths().into_iter().find(|p| p.is_file()),
    }
}

/// Builds the active rule configuration for a command.
///
/// The built-in rules are merged with the user's rule file (if any), then
/// `enable`/`disable` filters are applied.
pub fn load_active_config(
    config_path: Option<&Path>,
    enable: &[String],
    disable: &[String],
) -> Result<ClassifierConfig> {
    let defaults = ClassifierConfig::load_default_rules().context("Failed to load built-in rules")?;

    let user_config = match find_user_config(config_path) {
        Some(path) => {
            info!("Using rule file {}", path.display());
            Some(ClassifierConfig::load_from_file(&path)?)
        }
        None => {
            debug!("No user rule file found; using built-in rules only.");
            None
        }
    };

    let mut config = merge_rules(defaults, user_config);
    config.set_active_rules(enable, disable);
    Ok(config)
}
