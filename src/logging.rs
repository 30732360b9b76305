//! Logger setup for the demo binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence. Without it, pet behaviour logs at debug level
/// when `verbose` is set and at info otherwise; other crates stay at warn.
pub fn init(verbose: bool) {
    let pet_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(default_filter(pet_level));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis().format_module_path(false);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}

fn default_filter(pet_level: LevelFilter) -> String {
    format!("{},{}={pet_level}", LevelFilter::Warn, env!("CARGO_PKG_NAME"))
}
