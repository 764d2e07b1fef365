//! The text-matching capability shared by structural and language rules.

use regex::Regex;

/// Anything that can count its occurrences in a text.
pub trait PatternMatcher {
    /// Number of non-overlapping matches in `text`.
    fn count_matches(&self, text: &str) -> usize;
}

impl PatternMatcher for Regex {
    fn count_matches(&self, text: &str) -> usize {
        self.find_iter(text).count()
    }
}
