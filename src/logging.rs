//! Logger setup for the command-line tool

use log::LevelFilter;

/// Map a `-v` count to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` overrides the level chosen by `verbosity` when set. Calling this more than
/// once keeps the first logger.
pub fn init_logger(verbosity: u8) {
    let level = level_for(verbosity);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
