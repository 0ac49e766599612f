//! Startup configuration, read once from `config.json` in the app data directory

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Config file name (inside [`data_dir`]).
pub const CONFIG_FILENAME: &str = "config.json";

/// App data directory; copy `config.json` here to override the defaults.
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("leaf-todo")
}

pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILENAME)
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the fixed-name PNG assets.
    pub assets_dir: PathBuf,
    /// Looping background track; optional at runtime.
    pub music_path: PathBuf,
    /// 0.0..=1.0
    pub music_volume: f32,
    pub leaf_spawn_interval_secs: f64,
    pub frame_rate_hz: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("Assets"),
            music_path: PathBuf::from("Music/Music.mp3"),
            music_volume: 0.05,
            leaf_spawn_interval_secs: 0.7,
            frame_rate_hz: 60.0,
        }
    }
}

impl AppConfig {
    /// Reads the config at `path`. A missing file is not an error and yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Loads from [`config_path`], logging and falling back to the defaults on error.
    pub fn load_or_default() -> Self {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("config: {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn frame_interval_secs(&self) -> f64 {
        1.0 / self.frame_rate_hz
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.music_volume = if self.music_volume.is_finite() {
            self.music_volume.clamp(0.0, 1.0)
        } else {
            defaults.music_volume
        };
        if self.leaf_spawn_interval_secs.is_nan() || self.leaf_spawn_interval_secs <= 0.0 {
            self.leaf_spawn_interval_secs = defaults.leaf_spawn_interval_secs;
        }
        if self.frame_rate_hz.is_nan() || self.frame_rate_hz <= 0.0 {
            self.frame_rate_hz = defaults.frame_rate_hz;
        }
        self
    }
}
