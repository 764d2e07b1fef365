// clipsort-core/src/lib.rs
//! # clipsort Core Library
//!
//! `clipsort-core` decides whether a block of pasted text is source code or
//! prose, how confident that decision is, and which language the code most
//! resembles. A sharing front-end uses the answer to route content and to
//! pick a rendering treatment.
//!
//! The classifier is a fast, explainable, regex-weighted scorer. It is not a
//! parser, and it makes a best-effort decision rather than a guaranteed one.
//!
//! ## Modules
//!
//! * `config`: Rule tables (`ScoringRuleDef`, `LanguageRuleDef`), loading, merging and validation.
//! * `rules`: Compiles rule tables into regexes and caches them.
//! * `analysis`: The structural scoring pass and the language ranking pass.
//! * `engine`: Defines the `ContentClassifier` trait.
//! * `engines`: Concrete implementations of `ContentClassifier`.
//! * `classification`: Result and diagnostic types.
//! * `headless`: One-shot helpers such as [`classify`].
//! * `debounce`: Classify-after-idle wrapper for live typing.
//!
//! ## Usage Example
//!
//! ```rust
//! use clipsort_core::classify;
//!
//! let result = classify("def add(a, b):\n    return a + b");
//! assert!(result.is_code);
//! assert_eq!(result.detected_language, "python");
//!
//! let prose = classify("hello, how are you today? I hope you're doing well!");
//! assert!(!prose.is_code);
//! assert_eq!(prose.detected_language, "plaintext");
//! ```
//!
//! ## Error Handling
//!
//! Classification never fails. Loading and compiling rule tables returns
//! `anyhow::Result`, with `ClipsortError` describing compilation failures.
//!
//! ## Known Limitations
//!
//! JSON-shaped text is routed as code. Prose dense with operators and
//! punctuation (emoticons, inline arithmetic) can occasionally cross the
//! threshold; that is inherent to a weighted-pattern approach.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analysis;
pub mod classification;
pub mod config;
pub mod debounce;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;

/// Re-exports the public configuration types, constants and functions.
pub use config::{
    merge_rules,
    user_config_candidate_paths,
    validate_rules,
    ClassifierConfig,
    LanguageRuleDef,
    ScoringRuleDef,
    CODE_CONFIDENCE_THRESHOLD,
    MAX_PATTERN_LENGTH,
    MIN_LENGTH_FOR_CLASSIFICATION,
    PLAINTEXT,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ClipsortError;

/// Re-exports the classifier trait and its heuristic implementation.
pub use engine::ContentClassifier;
pub use engines::heuristic_engine::HeuristicClassifier;

/// Re-exports result and diagnostic types.
pub use classification::{
    ClassificationResult,
    ContentKind,
    LanguageRanking,
    LanguageScore,
    RuleHit,
    StructuralScore,
};

/// Re-exports types and functions for one-shot use.
pub use headless::{classify, default_classifier, headless_classify_string};

/// Re-exports the debounced wrapper.
pub use debounce::{spawn_debounced_classifier, DebouncedClassifier};

/// Re-exports compiled rule types for advanced usage.
pub use rules::compiler::{compile_rules, CompiledLanguageRule, CompiledRules, CompiledScoringRule};
pub use rules::matcher::PatternMatcher;
