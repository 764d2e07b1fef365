// clipsort-stats/src/normalize/mod.rs
use libm::sqrt;

/// Multiplier applied after dividing by the square root of the length.
pub const NORMALIZATION_SCALE: f64 = 10.0;

/// Scales a raw rule score by text length.
///
/// Dividing by `sqrt(len)` rather than `len` keeps long snippets from being
/// flattened to zero while still discounting sheer volume.
pub fn normalize_score(total_score: f64, text_length: usize) -> f64 {
    if text_length == 0 {
        return 0.0;
    }
    (total_score / sqrt(text_length as f64)) * NORMALIZATION_SCALE
}
