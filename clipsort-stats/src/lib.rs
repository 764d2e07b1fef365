// clipsort-stats/src/lib.rs
//! Language-agnostic text-shape statistics used by the clipsort classifier.
//!
//! Everything here is allocation-free and works on `&str` directly, so the
//! crate builds without `std`.
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod chars;
pub mod lines;
pub mod normalize;
pub mod scoring;

/// Common type definitions
pub type Confidence = f64;
