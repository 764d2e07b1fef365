//! Result and diagnostic types produced by a classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use clipsort_stats::scoring::TextSignals;

use crate::config::{CODE_CONFIDENCE_THRESHOLD, PLAINTEXT};

/// The outcome of classifying one block of text.
///
/// Field names serialize in camelCase (`isCode`, `detectedLanguage`) to match
/// what the sharing front-end consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_code: bool,
    /// Heuristic score in `[0, 100]`. Not a probability.
    pub confidence: f64,
    /// Best-guess language tag, or `"plaintext"` when `is_code` is false.
    pub detected_language: String,
}

impl ClassificationResult {
    /// The result for text that carries no usable signal.
    pub fn plaintext() -> Self {
        Self {
            is_code: false,
            confidence: 0.0,
            detected_language: PLAINTEXT.to_string(),
        }
    }

    /// Applies the threshold and the gating rule: a language tag is only
    /// surfaced for text that was decided to be code.
    pub fn from_scores(confidence: f64, ranked_language: &str) -> Self {
        let is_code = confidence >= CODE_CONFIDENCE_THRESHOLD;
        let detected_language = if is_code { ranked_language } else { PLAINTEXT };
        Self {
            is_code,
            confidence,
            detected_language: detected_language.to_string(),
        }
    }

    /// How the content should be routed.
    pub fn content_kind(&self) -> ContentKind {
        if self.is_code {
            ContentKind::Code
        } else {
            ContentKind::Text
        }
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_code {
            write!(f, "code ({}, confidence {:.1})", self.detected_language, self.confidence)
        } else {
            write!(f, "text (confidence {:.1})", self.confidence)
        }
    }
}

/// Routing decision derived from a [`ClassificationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Code,
}

/// Contribution of one structural rule that matched at least once.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHit {
    pub rule_name: String,
    pub match_count: usize,
    pub weight: f64,
    /// `match_count * weight`.
    pub contribution: f64,
}

/// Full breakdown of the structural pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralScore {
    /// Sum of `match_count * weight` over all rules.
    pub total_score: f64,
    /// Total matches across all rules. Diagnostic only.
    pub match_count: usize,
    /// `total_score / sqrt(len) * 10`.
    pub normalized_score: f64,
    pub signals: TextSignals,
    /// Normalised score plus signal bonuses, clamped to `[0, 100]`.
    pub confidence: f64,
    /// Rules with at least one match, in rule order.
    pub hits: Vec<RuleHit>,
}

/// Raw score of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageScore {
    pub language: String,
    pub score: usize,
}

/// Outcome of the language pass, before gating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRanking {
    /// Winning language, or `"plaintext"` if nothing scored.
    pub language: String,
    /// Score of the winner.
    pub score: usize,
    /// Every language's score, in rank order.
    pub scores: Vec<LanguageScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores_gates_language() {
        let below = ClassificationResult::from_scores(24.9, "python");
        assert!(!below.is_code);
        assert_eq!(below.detected_language, PLAINTEXT);

        let at = ClassificationResult::from_scores(CODE_CONFIDENCE_THRESHOLD, "python");
        assert!(at.is_code);
        assert_eq!(at.detected_language, "python");
        assert_eq!(at.content_kind(), ContentKind::Code);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = ClassificationResult::from_scores(40.0, "json");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isCode"], true);
        assert_eq!(value["detectedLanguage"], "json");
        assert_eq!(value["confidence"], 40.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ClassificationResult::from_scores(31.34, "sql").to_string(),
            "code (sql, confidence 31.3)"
        );
        assert_eq!(ClassificationResult::plaintext().to_string(), "text (confidence 0.0)");
    }
}
