// clipsort/src/logger.rs
//! Logger initialisation for the CLI.
//! License: MIT OR APACHE 2.0

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises `env_logger`, writing to stderr.
///
/// An explicit `level` overrides `RUST_LOG`; without one, `RUST_LOG` is
/// honoured and defaults to `warn`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised; keeping the existing one.");
    }
}
