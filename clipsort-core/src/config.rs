//! Configuration management for `clipsort-core`.
//!
//! This module defines the rule tables the classifier runs on: weighted
//! structural rules and per-language signal sets. It handles YAML
//! deserialization and provides utilities for loading, merging, filtering and
//! validating these tables.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::errors::ClipsortError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Texts whose trimmed length is below this are always plaintext.
pub const MIN_LENGTH_FOR_CLASSIFICATION: usize = 10;

/// Confidence at or above which a text is classified as code.
pub const CODE_CONFIDENCE_THRESHOLD: f64 = 25.0;

/// Language tag reported for anything that is not code.
pub const PLAINTEXT: &str = "plaintext";

/// A single weighted structural rule: one "this looks like code" signal.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringRuleDef {
    /// Unique identifier for the rule (e.g., "arrow_function").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// Score added per match. Must be finite and positive.
    pub weight: f64,
    /// If true, `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for ScoringRuleDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            weight: 1.0,
            multiline: true,
            dot_matches_new_line: false,
            enabled: None,
        }
    }
}

impl Hash for ScoringRuleDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.pattern.hash(state);
        self.weight.to_bits().hash(state);
        self.multiline.hash(state);
        self.dot_matches_new_line.hash(state);
        self.enabled.hash(state);
    }
}

/// Signals characteristic of one language or format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageRuleDef {
    /// Tag reported in `detected_language` (e.g., "python").
    pub language: String,
    /// Patterns whose match counts are summed into the language score.
    pub patterns: Vec<String>,
    /// If true, `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// Explicit override for enabling/disabling the language.
    pub enabled: Option<bool>,
}

impl Default for LanguageRuleDef {
    fn default() -> Self {
        Self {
            language: String::new(),
            patterns: Vec::new(),
            multiline: true,
            enabled: None,
        }
    }
}

/// The complete rule configuration of a classifier.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Weighted structural rules, applied in order.
    #[serde(default)]
    pub scoring_rules: Vec<ScoringRuleDef>,
    /// Language signal sets. Order decides ties.
    #[serde(default)]
    pub language_rules: Vec<LanguageRuleDef>,
}

impl Hash for ClassifierConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scoring_rules.hash(state);
        self.language_rules.hash(state);
    }
}

impl ClassifierConfig {
    /// Loads classification rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(ClipsortError::from)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ClassifierConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config)?;
        info!(
            "Loaded {} scoring rules and {} language rules from file {}.",
            config.scoring_rules.len(),
            config.language_rules.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the built-in rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: ClassifierConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!(
            "Loaded {} default scoring rules and {} language rules.",
            config.scoring_rules.len(),
            config.language_rules.len()
        );
        Ok(config)
    }

    /// Drops disabled rules and languages.
    ///
    /// A name in `enable_rules` re-enables an entry whose `enabled` field is
    /// `false`; a name in `disable_rules` always wins. Names are matched
    /// against scoring rule names and language tags alike.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!(
            "Rule counts before filtering: {} scoring, {} language",
            self.scoring_rules.len(),
            self.language_rules.len()
        );

        let known: HashSet<&str> = self
            .scoring_rules
            .iter()
            .map(|r| r.name.as_str())
            .chain(self.language_rules.iter().map(|l| l.language.as_str()))
            .collect();

        for name in enable_set.difference(&known) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", name);
        }
        for name in disable_set.difference(&known) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", name);
        }

        // Explicitly enabled entries are marked so the compiler does not skip them.
        let activate = |name: &str, enabled: &mut Option<bool>| {
            if disable_set.contains(name) {
                return false;
            }
            if enable_set.contains(name) {
                *enabled = Some(true);
            }
            *enabled != Some(false)
        };

        self.scoring_rules.retain_mut(|r| activate(&r.name, &mut r.enabled));
        self.language_rules.retain_mut(|l| activate(&l.language, &mut l.enabled));

        debug!(
            "Rule counts after filtering: {} scoring, {} language",
            self.scoring_rules.len(),
            self.language_rules.len()
        );
    }
}

/// Merges user-defined rules into the defaults.
///
/// A user rule with the name (or language tag) of a default entry replaces it
/// in place; new entries are appended. Order is preserved because language
/// order decides ranking ties.
pub fn merge_rules(
    default_config: ClassifierConfig,
    user_config: Option<ClassifierConfig>,
) -> ClassifierConfig {
    debug!(
        "merge_rules called. Default counts: {} scoring, {} language",
        default_config.scoring_rules.len(),
        default_config.language_rules.len()
    );

    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        debug!(
            "User config provided. Merging {} scoring rules and {} language rules.",
            user_cfg.scoring_rules.len(),
            user_cfg.language_rules.len()
        );

        for user_rule in user_cfg.scoring_rules {
            match merged.scoring_rules.iter_mut().find(|r| r.name == user_rule.name) {
                Some(existing) => *existing = user_rule,
                None => merged.scoring_rules.push(user_rule),
            }
        }

        for user_lang in user_cfg.language_rules {
            match merged.language_rules.iter_mut().find(|l| l.language == user_lang.language) {
                Some(existing) => *existing = user_lang,
                None => merged.language_rules.push(user_lang),
            }
        }
    }

    debug!(
        "Final counts after merge: {} scoring, {} language",
        merged.scoring_rules.len(),
        merged.language_rules.len()
    );
    merged
}

/// Locations searched for a user rule file when none is given explicitly.
pub fn user_config_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".clipsort")),
        dirs::config_dir().map(|p| p.join("clipsort")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join("rules.yaml"))
        .collect()
}

/// Validates rule integrity (names, regex compilation, weights).
pub fn validate_rules(config: &ClassifierConfig) -> Result<()> {
    let mut errors = Vec::new();

    let mut rule_names = HashSet::new();
    for rule in &config.scoring_rules {
        if rule.name.is_empty() {
            errors.push("A scoring rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if !rule.weight.is_finite() || rule.weight <= 0.0 {
            errors.push(format!(
                "Rule '{}' has weight {}, expected a positive number.",
                rule.name, rule.weight
            ));
        }

        check_pattern(&rule.name, &rule.pattern, &mut errors);
    }

    let mut languages = HashSet::new();
    for lang in &config.language_rules {
        if lang.language.is_empty() {
            errors.push("A language rule has an empty `language` field.".to_string());
        } else if !languages.insert(lang.language.as_str()) {
            errors.push(format!("Duplicate language found: '{}'.", lang.language));
        }

        if lang.patterns.is_empty() {
            errors.push(format!("Language '{}' has no patterns.", lang.language));
        }
        for pattern in &lang.patterns {
            check_pattern(&lang.language, pattern, &mut errors);
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

fn check_pattern(owner: &str, pattern: &str, errors: &mut Vec<String>) {
    if pattern.is_empty() {
        errors.push(format!("Rule '{}' has an empty pattern.", owner));
        return;
    }
    if pattern.len() > MAX_PATTERN_LENGTH {
        errors.push(format!(
            "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
            owner,
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
        return;
    }
    if let Err(e) = Regex::new(pattern) {
        errors.push(format!("Rule '{}' has an invalid regex pattern: {}", owner, e));
    }
}
