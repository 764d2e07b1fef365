// clipsort-core/src/engines/heuristic_engine.rs
//! A `ContentClassifier` built from weighted regular-expression rules.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use clipsort_stats::scoring::HeuristicWeights;

use crate::analysis::language::rank_languages;
use crate::analysis::structure::score_structure;
use crate::classification::{ClassificationResult, LanguageRanking, StructuralScore};
use crate::config::{ClassifierConfig, MIN_LENGTH_FOR_CLASSIFICATION};
use crate::engine::ContentClassifier;
use crate::rules::compiler::{get_or_compile_rules, CompiledRules};

#[derive(Debug)]
pub struct HeuristicClassifier {
    compiled_rules: Arc<CompiledRules>,
    config: ClassifierConfig,
    weights: HeuristicWeights,
}

impl HeuristicClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        Self::with_weights(config, HeuristicWeights::default())
    }

    /// Builds a classifier with non-default signal bonuses.
    pub fn with_weights(config: ClassifierConfig, weights: HeuristicWeights) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile classification rules for HeuristicClassifier")?;

        Ok(Self {
            compiled_rules,
            config,
            weights,
        })
    }

    /// Builds a classifier from the embedded rule tables.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(ClassifierConfig::load_default_rules()?)
    }
}

impl ContentClassifier for HeuristicClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        if text.trim().chars().count() < MIN_LENGTH_FOR_CLASSIFICATION {
            debug!("Text too short to classify ({} bytes).", text.len());
            return ClassificationResult::plaintext();
        }

        let structure = self.score_structure(text);
        let ranking = self.rank_languages(text);
        let result = ClassificationResult::from_scores(structure.confidence, &ranking.language);

        debug!(
            "Classified {} bytes: {} matches, raw {:.2}, confidence {:.2}, ranked '{}' -> '{}'",
            text.len(),
            structure.match_count,
            structure.total_score,
            result.confidence,
            ranking.language,
            result.detected_language
        );
        result
    }

    fn score_structure(&self, text: &str) -> StructuralScore {
        score_structure(&self.compiled_rules.scoring, text, &self.weights)
    }

    fn rank_languages(&self, text: &str) -> LanguageRanking {
        rank_languages(&self.compiled_rules.languages, text)
    }

    fn compiled_rules(&self) -> &CompiledRules { &self.compiled_rules }
    fn get_config(&self) -> &ClassifierConfig { &self.config }
}
