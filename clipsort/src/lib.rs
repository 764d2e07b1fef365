// clipsort/src/lib.rs
//! # clipsort CLI Application
//!
//! This crate provides the terminal interface for the clipsort classifier:
//! read a pasted snippet from a file, the clipboard or stdin, and report
//! whether it is code and which language it resembles.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
