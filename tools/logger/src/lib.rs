//! Structured logging init for the harness and CLI. The core crate (`ansv`)
//! stays logging-free; this crate exists only for the ambient binaries built
//! around it.

use log::LevelFilter;

/// Initialize `env_logger` with `level` as the default filter, overridable by
/// `RUST_LOG` the usual way. Safe to call more than once — later calls are
/// no-ops (`env_logger::Builder::try_init` swallows the "already initialized"
/// error rather than panicking).
pub fn init(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_env("RUST_LOG")
        .try_init();
}
