//! errors.rs - Custom error types for the clipsort-core library.
//!
//! Classification itself cannot fail; these errors cover loading and
//! compiling rule tables.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `clipsort-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClipsortError {
    #[error("Failed to compile rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Rule '{0}': weight {1} is not a positive number")]
    InvalidWeight(String, f64),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
