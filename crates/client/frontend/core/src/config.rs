//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    /// Where the engine seed comes from at mount.
    pub seed: SeedSource,
    /// Dump every received snapshot at trace level.
    pub log_snapshots: bool,
}

impl FrontendConfig {
    pub const fn new(seed: SeedSource, log_snapshots: bool) -> Self {
        Self {
            seed,
            log_snapshots,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HUD_SEED` - Fixed engine seed (default: wall clock in milliseconds)
    /// - `HUD_LOG_SNAPSHOTS` - Trace every snapshot pushed by the engine (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("HUD_SEED") {
            config.seed = SeedSource::Fixed(seed);
        }

        if let Some(enabled) = read_env_bool("HUD_LOG_SNAPSHOTS") {
            config.log_snapshots = enabled;
        }

        config
    }
}

/// Source of the seed handed to the engine at mount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SeedSource {
    /// Milliseconds since the Unix epoch, sampled at mount.
    Clock,
    Fixed(u64),
}

impl Default for SeedSource {
    fn default() -> Self {
        if cfg!(test) {
            SeedSource::Fixed(0)
        } else {
            SeedSource::Clock
        }
    }
}

impl SeedSource {
    pub fn resolve(&self) -> u64 {
        match self {
            SeedSource::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or_default(),
            SeedSource::Fixed(seed) => *seed,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
