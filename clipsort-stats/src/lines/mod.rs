// clipsort-stats/src/lines/mod.rs

/// Shape of a text block measured line by line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineProfile {
    /// Number of `\n`-separated lines. A trailing newline yields a final empty line.
    /// A `\r` before the `\n` belongs to the line terminator.
    pub line_count: usize,
    /// Lines that start with at least two spaces.
    pub indented_lines: usize,
    /// Character count of the whole text, newlines included. A `\r\n` pair
    /// counts as one character.
    pub char_count: usize,
}

impl LineProfile {
    /// Fraction of lines that are indented, in `[0, 1]`.
    pub fn indentation_ratio(&self) -> f64 {
        if self.line_count == 0 {
            return 0.0;
        }
        self.indented_lines as f64 / self.line_count as f64
    }

    /// Mean number of characters per line.
    pub fn average_line_length(&self) -> f64 {
        if self.line_count == 0 {
            return 0.0;
        }
        self.char_count as f64 / self.line_count as f64
    }
}

/// Builds a [`LineProfile`] for `text`, treating `\r\n` as one line break.
///
/// Splitting always produces at least one line, so even the empty string has
/// a line count of one.
pub fn profile_lines(text: &str) -> LineProfile {
    let mut line_count = 0;
    let mut indented_lines = 0;

    for line in text.split('\n') {
        line_count += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with("  ") {
            indented_lines += 1;
        }
    }

    let crlf_pairs = text.matches("\r\n").count();

    LineProfile {
        line_count,
        indented_lines,
        char_count: text.chars().count() - crlf_pairs,
    }
}
