// clipsort/src/ui/mod.rs
pub mod output_format;
pub mod tables;
