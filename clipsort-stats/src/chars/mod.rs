// clipsort-stats/src/chars/mod.rs

/// Characters counted as operators by the `has_operators` heuristic.
pub const OPERATOR_CHARS: [char; 13] =
    ['=', '<', '>', '!', '+', '-', '*', '/', '%', '&', '|', '^', '~'];

/// Occurrence counts of the punctuation classes the classifier cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCounts {
    /// `{` and `}` combined.
    pub braces: usize,
    /// Any character from [`OPERATOR_CHARS`].
    pub operators: usize,
}

/// Counts braces and operator characters in one pass.
pub fn count_chars(text: &str) -> CharCounts {
    let mut counts = CharCounts::default();
    for c in text.chars() {
        if c == '{' || c == '}' {
            counts.braces += 1;
        } else if OPERATOR_CHARS.contains(&c) {
            counts.operators += 1;
        }
    }
    counts
}
