//! Logger setup for the `crossfire` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Workspace crates whose records are shown at the chosen level.
/// Everything else (dependencies) stays at `warn`.
const TARGETS: [&str; 4] = [
    "crossfire_app",
    "crossfire_sim",
    "crossfire_ai",
    "crossfire_core",
];

/// Filter used when `RUST_LOG` is unset.
///
/// `verbose` lowers the workspace crates to debug, which includes a line
/// per missed shot.
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let level = level.as_str().to_ascii_lowercase();

    let mut filter = String::from("warn");
    for target in TARGETS {
        filter.push_str(&format!(",{target}={level}"));
    }
    filter
}

/// Initializes the global logger. `RUST_LOG` overrides [`default_filter`].
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // Fails only if a logger is already installed (e.g. a second call in tests).
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
