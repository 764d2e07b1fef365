//! compiler.rs - Manages the compilation and caching of classification rules.
//!
//! This module converts a `ClassifierConfig` into `CompiledRules`, which hold
//! ready-to-run regexes for both scoring passes. A global cache keyed by a
//! hash of the configuration avoids recompiling the same tables.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{ClassifierConfig, LanguageRuleDef, ScoringRuleDef, MAX_PATTERN_LENGTH};
use crate::errors::ClipsortError;

/// A structural rule ready for matching.
#[derive(Debug)]
pub struct CompiledScoringRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The unique name of the rule.
    pub name: String,
    /// Score contributed by each match.
    pub weight: f64,
}

/// A language signal set ready for matching.
#[derive(Debug)]
pub struct CompiledLanguageRule {
    /// The language tag this entry votes for.
    pub language: String,
    /// Compiled patterns, in configuration order.
    pub patterns: Vec<Regex>,
}

/// Both rule tables of a classifier, compiled.
#[derive(Debug)]
pub struct CompiledRules {
    /// Structural rules, in configuration order.
    pub scoring: Vec<CompiledScoringRule>,
    /// Language rules, in rank order.
    pub languages: Vec<CompiledLanguageRule>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules.
    /// The key is a hash of the `ClassifierConfig`.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the `ClassifierConfig` to create a cache key.
///
/// Rules are hashed in order: language order decides ties, so two configs
/// that differ only in order are different classifiers.
fn hash_config(config: &ClassifierConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

fn build_regex(
    owner: &str,
    pattern: &str,
    multiline: bool,
    dot_matches_new_line: bool,
) -> Result<Regex, ClipsortError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ClipsortError::PatternLengthExceeded(
            owner.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    RegexBuilder::new(pattern)
        .multi_line(multiline)
        .crlf(true) // `^`/`$` treat `\r\n` as a line break; `.` skips `\r`
        .dot_matches_new_line(dot_matches_new_line)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| ClipsortError::RuleCompilationError(owner.to_string(), e))
}

fn compile_scoring_rule(rule: &ScoringRuleDef) -> Result<CompiledScoringRule, ClipsortError> {
    if !rule.weight.is_finite() || rule.weight <= 0.0 {
        return Err(ClipsortError::InvalidWeight(rule.name.clone(), rule.weight));
    }
    let regex = build_regex(&rule.name, &rule.pattern, rule.multiline, rule.dot_matches_new_line)?;
    Ok(CompiledScoringRule {
        regex,
        name: rule.name.clone(),
        weight: rule.weight,
    })
}

fn compile_language_rule(
    lang: &LanguageRuleDef,
    errors: &mut Vec<ClipsortError>,
) -> CompiledLanguageRule {
    let mut patterns = Vec::with_capacity(lang.patterns.len());
    for pattern in &lang.patterns {
        match build_regex(&lang.language, pattern, lang.multiline, false) {
            Ok(regex) => patterns.push(regex),
            Err(e) => errors.push(e),
        }
    }
    CompiledLanguageRule {
        language: lang.language.clone(),
        patterns,
    }
}

/// Compiles both rule tables of `config`.
///
/// Entries with `enabled: false` are skipped. Every failing pattern is
/// collected, and all of them are reported together.
pub fn compile_rules(config: &ClassifierConfig) -> Result<CompiledRules, ClipsortError> {
    debug!(
        "Starting compilation of {} scoring rules and {} language rules.",
        config.scoring_rules.len(),
        config.language_rules.len()
    );

    let mut scoring = Vec::with_capacity(config.scoring_rules.len());
    let mut languages = Vec::with_capacity(config.language_rules.len());
    let mut compilation_errors = Vec::new();

    for rule in &config.scoring_rules {
        if rule.enabled == Some(false) {
            debug!("Skipping disabled rule '{}'.", rule.name);
            continue;
        }
        match compile_scoring_rule(rule) {
            Ok(compiled) => {
                debug!("Rule '{}' compiled successfully.", rule.name);
                scoring.push(compiled);
            }
            Err(e) => compilation_errors.push(e),
        }
    }

    for lang in &config.language_rules {
        if lang.enabled == Some(false) {
            debug!("Skipping disabled language '{}'.", lang.language);
            continue;
        }
        languages.push(compile_language_rule(lang, &mut compilation_errors));
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(ClipsortError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling rules. Total compiled: {} scoring, {} language.",
            scoring.len(),
            languages.len()
        );
        Ok(CompiledRules { scoring, languages })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles it if not found.
///
/// Returns an `Arc` so classifiers built from the same configuration share
/// one set of regexes.
pub fn get_or_compile_rules(config: &ClassifierConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_RULES_CACHE
            .read()
            .map_err(|_| anyhow!("compiled rule cache lock poisoned"))?;
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled_arc = Arc::new(compile_rules(config)?);

    COMPILED_RULES_CACHE
        .write()
        .map_err(|_| anyhow!("compiled rule cache lock poisoned"))?
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled_arc)
}
