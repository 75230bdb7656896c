//! Logger setup for the command line binary.

use log::LevelFilter;

/// Initialize env_logger at the given level.
///
/// Builds on the default environment so formatting knobs such as
/// `RUST_LOG_STYLE` keep working; the level itself comes from the CLI.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
