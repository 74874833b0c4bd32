//! Session configuration: JSON file first, command-line overrides on top.

use std::path::Path;

use anyhow::Context;

use crossfire_core::enums::FireMode;
use crossfire_sim::SimConfig;

/// Values given on the command line. `None` keeps the file or default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub random_enemies: Option<usize>,
    pub fire_mode: Option<FireMode>,
    pub end_when_cleared: bool,
}

/// Read a [`SimConfig`] from JSON. Missing fields take their defaults.
pub fn load_file(path: &Path) -> anyhow::Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Build the session config from an optional file plus overrides.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<SimConfig> {
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => SimConfig::default(),
    };

    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(count) = overrides.random_enemies {
        config.random_enemies = count;
    }
    if let Some(mode) = overrides.fire_mode {
        config.fire_mode = mode;
    }
    config.end_when_cleared |= overrides.end_when_cleared;

    config.validate().context("invalid session config")?;
    log::debug!("resolved config: {config:?}");
    Ok(config)
}
