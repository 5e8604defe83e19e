use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::constants;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub controls: ControlsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Persistent source loaded when the session starts. Empty means the
    /// session starts without media.
    #[serde(default)]
    pub default_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Start the initial session muted so autoplay of the default source
    /// survives host autoplay policy.
    #[serde(default = "default_true")]
    pub start_muted: bool,

    #[serde(default = "default_volume")]
    pub default_volume: f64,

    #[serde(default = "default_rate")]
    pub default_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            start_muted: default_true(),
            default_volume: default_volume(),
            default_rate: default_rate(),
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
        }
    }
}

impl PlayerConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            debug!("Loading config from {:?}", config_path);
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let config: PlayerConfig =
                toml::from_str(&contents).context("Failed to parse config file")?;
            info!("Config loaded successfully");
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            Ok(PlayerConfig::default())
        }
    }

    /// Load the config, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config, using defaults: {:#}", e);
                PlayerConfig::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents).context("Failed to write config file")?;
        debug!("Config saved to {:?}", config_path);
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("nova-player").join("config.toml"))
    }

    /// Parsed default source, if one is configured. A malformed URL is
    /// logged and treated as no default.
    pub fn default_source(&self) -> Option<Url> {
        let raw = self.source.default_url.trim();
        if raw.is_empty() {
            return None;
        }
        match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Ignoring malformed default source URL {:?}: {}", raw, e);
                None
            }
        }
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.controls.hide_delay_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_volume() -> f64 {
    constants::DEFAULT_VOLUME
}

fn default_rate() -> f64 {
    constants::DEFAULT_PLAYBACK_RATE
}

fn default_hide_delay_ms() -> u64 {
    constants::CONTROLS_HIDE_DELAY_MS
}
