//! Configuration for the Tally demo and embedding hosts.
//!
//! Loaded from `~/.tally/config.toml` (overridable via `TALLY_CONFIG`).
//! Every section and field is optional; a missing file is not an error.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;

use tally_types::{DisplayFormat, Easing, FontSpec, LabelAlignment};

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TallyConfig {
    pub animation: Option<AnimationConfig>,
    pub label: Option<LabelConfig>,
    pub app: Option<AppConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    /// Tick period in milliseconds. The 10ms default matches the engine's
    /// fixed tick.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Length of a demo count in seconds.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f32,
    #[serde(default = "default_easing")]
    pub easing: Easing,
    #[serde(default)]
    pub format: DisplayFormat,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            duration_secs: default_duration_secs(),
            easing: default_easing(),
            format: DisplayFormat::default(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Negative or non-finite configured durations collapse to zero
    /// (instant completion).
    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.duration_secs.is_finite() && self.duration_secs > 0.0 {
            Duration::from_secs_f32(self.duration_secs)
        } else {
            Duration::ZERO
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub alignment: LabelAlignment,
    #[serde(default)]
    pub font: FontSpec,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Swap the Kanagawa palette for a plain high-contrast one.
    #[serde(default)]
    pub high_contrast: bool,
}

const fn default_tick_interval_ms() -> u64 {
    10
}

const fn default_duration_secs() -> f32 {
    1.5
}

const fn default_easing() -> Easing {
    Easing::EaseOut
}

impl TallyConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("TALLY_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".tally").join("config.toml"))
}
