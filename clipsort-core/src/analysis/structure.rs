//! Code-likelihood scoring: weighted structural rules plus whole-text signals.

use clipsort_stats::chars::count_chars;
use clipsort_stats::lines::profile_lines;
use clipsort_stats::normalize::normalize_score;
use clipsort_stats::scoring::{calculate_confidence, HeuristicWeights, SignalThresholds, TextSignals};

use crate::classification::{RuleHit, StructuralScore};
use crate::rules::compiler::CompiledScoringRule;
use crate::rules::matcher::PatternMatcher;

/// Scores how code-like `text` is.
///
/// Every rule's non-overlapping matches are counted over the full text and
/// weighted; the sum is normalised by the square root of the character count
/// and the auxiliary signal bonuses are added on top.
pub fn score_structure(
    rules: &[CompiledScoringRule],
    text: &str,
    weights: &HeuristicWeights,
) -> StructuralScore {
    let mut total_score = 0.0;
    let mut match_count = 0;
    let mut hits = Vec::new();

    for rule in rules {
        let count = rule.regex.count_matches(text);
        if count == 0 {
            continue;
        }
        let contribution = count as f64 * rule.weight;
        total_score += contribution;
        match_count += count;
        hits.push(RuleHit {
            rule_name: rule.name.clone(),
            match_count: count,
            weight: rule.weight,
            contribution,
        });
    }

    let profile = profile_lines(text);
    let normalized_score = normalize_score(total_score, profile.char_count);
    let signals = TextSignals::evaluate(&profile, &count_chars(text), &SignalThresholds::default());
    let confidence = calculate_confidence(normalized_score, &signals, weights);

    StructuralScore {
        total_score,
        match_count,
        normalized_score,
        signals,
        confidence,
        hits,
    }
}
