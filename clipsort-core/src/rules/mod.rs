//! Rule compilation and pattern matching.
//!
//! `compiler` turns a [`ClassifierConfig`](crate::config::ClassifierConfig)
//! into regexes once and caches the result; `matcher` defines the single
//! capability the scoring passes need from a pattern.

pub mod compiler;
pub mod matcher;
