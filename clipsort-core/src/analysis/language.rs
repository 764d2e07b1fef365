//! Language ranking: which language's signal set matches the text most often.

use crate::classification::{LanguageRanking, LanguageScore};
use crate::config::PLAINTEXT;
use crate::rules::compiler::CompiledLanguageRule;
use crate::rules::matcher::PatternMatcher;

/// Ranks `text` against every language entry, in order.
///
/// A language's score is the sum of its patterns' match counts. Only a
/// strictly higher score displaces the current leader, so ties go to the
/// language listed first. If nothing scores, the winner is `"plaintext"`.
pub fn rank_languages(rules: &[CompiledLanguageRule], text: &str) -> LanguageRanking {
    let mut best_language = PLAINTEXT;
    let mut best_score = 0;
    let mut scores = Vec::with_capacity(rules.len());

    for rule in rules {
        let score: usize = rule.patterns.iter().map(|p| p.count_matches(text)).sum();
        if score > best_score {
            best_score = score;
            best_language = rule.language.as_str();
        }
        scores.push(LanguageScore {
            language: rule.language.clone(),
            score,
        });
    }

    LanguageRanking {
        language: best_language.to_string(),
        score: best_score,
        scores,
    }
}
