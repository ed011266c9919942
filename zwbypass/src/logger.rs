// zwbypass/src/logger.rs
//! Logger setup for the binary. All log output goes to stderr so stdout only
//! ever carries results.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs `env_logger`.
///
/// `level_override` wins over `RUST_LOG`; without it `RUST_LOG` is honoured
/// and defaults to `warn`. Calling this twice is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags onto an override level.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
