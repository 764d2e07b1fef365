//! The two scoring passes of the heuristic classifier.
//!
//! Both are pure functions over compiled rules and the same input text. They
//! share no state and are composed (and gated) by
//! [`HeuristicClassifier`](crate::engines::heuristic_engine::HeuristicClassifier).

pub mod language;
pub mod structure;
