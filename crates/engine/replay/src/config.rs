//! Replay engine configuration.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ReplayConfig {
    /// Interval between scripted steps and surface redraws.
    pub tick: Duration,
    /// Restart the script after the last step.
    pub looping: bool,
    /// JSON Lines script to replay instead of the built-in demo.
    pub script_path: Option<PathBuf>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(500),
            looping: false,
            script_path: None,
        }
    }
}

impl ReplayConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HUD_REPLAY_SCRIPT` - Path to a JSON Lines snapshot script (default: built-in demo)
    /// - `HUD_REPLAY_TICK_MS` - Milliseconds between steps (default: 500)
    /// - `HUD_REPLAY_LOOP` - Restart the script when it ends (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("HUD_REPLAY_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(1));
        }

        if let Some(looping) = read_env_bool("HUD_REPLAY_LOOP") {
            config.looping = looping;
        }

        config.script_path = env::var("HUD_REPLAY_SCRIPT").ok().map(PathBuf::from);

        config
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
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
