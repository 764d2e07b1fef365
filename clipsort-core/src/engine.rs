// clipsort-core/src/engine.rs
//! Defines the core `ContentClassifier` trait.
//!
//! The trait is the seam between callers (the CLI, the debounced wrapper, a
//! sharing front-end) and a concrete way of deciding whether text is code.
//! The heuristic engine is the only implementation shipped here.
//!
//! License: MIT OR APACHE 2.0

use crate::classification::{ClassificationResult, LanguageRanking, StructuralScore};
use crate::config::ClassifierConfig;
use crate::rules::compiler::CompiledRules;

/// A pluggable content classifier.
///
/// Implementations must be pure: the same text always yields the same
/// result, and no call can fail.
pub trait ContentClassifier: Send + Sync {
    /// Decides whether `text` is code, how confidently, and in which language.
    ///
    /// The detected language is `"plaintext"` whenever `is_code` is false.
    fn classify(&self, text: &str) -> ClassificationResult;

    /// Runs only the structural pass and returns its full breakdown.
    ///
    /// Unlike [`classify`](Self::classify) this applies no length guard, so
    /// it can be used to explain a score.
    fn score_structure(&self, text: &str) -> StructuralScore;

    /// Runs only the language pass, without gating.
    fn rank_languages(&self, text: &str) -> LanguageRanking;

    /// Returns the compiled rules used by the classifier.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns the configuration the classifier was built from.
    fn get_config(&self) -> &ClassifierConfig;
}
