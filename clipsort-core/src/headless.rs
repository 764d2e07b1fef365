// File: clipsort-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot classification without managing a
//! classifier instance.

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::classification::ClassificationResult;
use crate::config::ClassifierConfig;
use crate::engine::ContentClassifier;
use crate::engines::heuristic_engine::HeuristicClassifier;

static DEFAULT_CLASSIFIER: Lazy<HeuristicClassifier> = Lazy::new(|| {
    HeuristicClassifier::with_default_rules()
        .expect("Built-in classification rules failed to compile")
});

/// The classifier built from the embedded rules, compiled on first use.
pub fn default_classifier() -> &'static HeuristicClassifier {
    &DEFAULT_CLASSIFIER
}

/// Classifies `text` with the built-in rules.
///
/// Total over all inputs, including the empty string.
pub fn classify(text: &str) -> ClassificationResult {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Classifies `text` with a caller-supplied rule configuration.
///
/// # Arguments
///
/// * `config` - The merged ClassifierConfig (defaults + optional user overrides).
/// * `text` - The content to classify.
pub fn headless_classify_string(config: ClassifierConfig, text: &str) -> Result<ClassificationResult> {
    let classifier = HeuristicClassifier::new(config)?;
    Ok(classifier.classify(text))
}
