// clipsort-stats/src/scoring/mod.rs
use crate::chars::{count_chars, CharCounts};
use crate::lines::{profile_lines, LineProfile};
use crate::Confidence;

/// Upper bound of the confidence scale.
pub const MAX_CONFIDENCE: Confidence = 100.0;

/// Flat bonuses added on top of the normalised rule score.
#[derive(Debug, Clone)]
pub struct HeuristicWeights {
    pub indentation_bonus: f64,
    pub brace_bonus: f64,
    pub operator_bonus: f64,
    pub line_length_bonus: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            indentation_bonus: 10.0,
            brace_bonus: 10.0,
            operator_bonus: 5.0,
            line_length_bonus: 5.0,
        }
    }
}

/// Cut-offs for the auxiliary heuristics. All comparisons are strict.
#[derive(Debug, Clone)]
pub struct SignalThresholds {
    /// `has_indentation` when the indented-line ratio is above this.
    pub indentation_ratio: f64,
    /// `has_braces` when the brace count is above this.
    pub braces: usize,
    /// `has_operators` when the operator count is above this.
    pub operators: usize,
    /// Exclusive lower bound of a code-like average line length.
    pub min_line_length: f64,
    /// Exclusive upper bound of a code-like average line length.
    pub max_line_length: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            indentation_ratio: 0.3,
            braces: 2,
            operators: 5,
            min_line_length: 10.0,
            max_line_length: 100.0,
        }
    }
}

/// Whole-text heuristics that complement the weighted rule matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSignals {
    pub has_indentation: bool,
    pub has_braces: bool,
    pub has_operators: bool,
    pub average_line_length: f64,
    pub line_length_in_range: bool,
}

impl TextSignals {
    /// Measures `text` against the default thresholds.
    pub fn from_text(text: &str) -> Self {
        Self::evaluate(&profile_lines(text), &count_chars(text), &SignalThresholds::default())
    }

    /// Derives the signals from precomputed statistics.
    pub fn evaluate(profile: &LineProfile, counts: &CharCounts, thresholds: &SignalThresholds) -> Self {
        let average_line_length = profile.average_line_length();
        Self {
            has_indentation: profile.indentation_ratio() > thresholds.indentation_ratio,
            has_braces: counts.braces > thresholds.braces,
            has_operators: counts.operators > thresholds.operators,
            average_line_length,
            line_length_in_range: average_line_length > thresholds.min_line_length
                && average_line_length < thresholds.max_line_length,
        }
    }
}

/// Combines the normalised score with the signal bonuses, clamped to `[0, 100]`.
pub fn calculate_confidence(
    normalized_score: f64,
    signals: &TextSignals,
    weights: &HeuristicWeights,
) -> Confidence {
    let mut confidence = normalized_score;

    if signals.has_indentation {
        confidence += weights.indentation_bonus;
    }
    if signals.has_braces {
        confidence += weights.brace_bonus;
    }
    if signals.has_operators {
        confidence += weights.operator_bonus;
    }
    if signals.line_length_in_range {
        confidence += weights.line_length_bonus;
    }

    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, MAX_CONFIDENCE)
}
