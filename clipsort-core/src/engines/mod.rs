// clipsort-core/src/engines/mod.rs
//! Concrete implementations of the `ContentClassifier` trait.
//!
//! Each engine lives in its own file and is declared here with
//! `pub mod <engine_name>;`.

pub mod heuristic_engine;
