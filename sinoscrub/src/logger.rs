// sinoscrub/src/logger.rs
//! Logger bootstrap for the CLI.
//!
//! Honors `RUST_LOG` by default; an explicit override (from `--quiet` or
//! `--verbose`) takes precedence.

use log::LevelFilter;

pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    // try_init: tests may initialize the logger more than once.
    let _ = builder.format_timestamp(None).try_init();
}
