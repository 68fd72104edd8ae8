//! Persistent component configuration model and defaults.

use std::path::Path;

use log::{info, warn};

use crate::component::COMPONENT_NAME;
use crate::slot::Revision;

/// Root configuration persisted to `play_track.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    #[serde(default)]
    /// Command-table identity and layout.
    pub component: ComponentConfig,
    #[serde(default)]
    /// Playlist contents for the host simulator.
    pub playlist: PlaylistConfig,
    #[serde(default)]
    /// Log output preferences.
    pub logging: LoggingConfig,
}

/// Command-table identity. Changing either field changes every command identifier.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ComponentConfig {
    #[serde(default = "default_component_name")]
    pub name: String,
    #[serde(default)]
    pub revision: Revision,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PlaylistConfig {
    #[serde(default)]
    pub tracks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

/// Level filter applied to the host's logger.
#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            name: default_component_name(),
            revision: Revision::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_component_name() -> String {
    COMPONENT_NAME.to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

/// Restores defaults for values the rest of the crate cannot work with.
pub fn sanitize_config(config: Config) -> Config {
    let name = config.component.name.trim();
    let name = if name.is_empty() {
        default_component_name()
    } else {
        name.to_string()
    };
    let focused = config
        .playlist
        .focused
        .filter(|&index| index < config.playlist.tracks.len());

    Config {
        component: ComponentConfig {
            name,
            revision: config.component.revision,
        },
        playlist: PlaylistConfig {
            tracks: config.playlist.tracks,
            focused,
        },
        logging: config.logging,
    }
}

/// Reads `config_file`, writing a default one first if it does not exist.
/// An unparsable file falls back to defaults.
pub fn load_or_create(config_file: &Path) -> Result<Config, String> {
    if !config_file.exists() {
        info!(
            "Config file not found. Creating default config. path={}",
            config_file.display()
        );
        if let Some(parent) = config_file.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                format!("Failed to create config dir {}: {}", parent.display(), err)
            })?;
        }
        let serialized = toml::to_string(&Config::default())
            .map_err(|err| format!("Failed to serialize default config: {}", err))?;
        std::fs::write(config_file, serialized).map_err(|err| {
            format!("Failed to write config {}: {}", config_file.display(), err)
        })?;
    }

    let content = std::fs::read_to_string(config_file)
        .map_err(|err| format!("Failed to read config {}: {}", config_file.display(), err))?;
    let config = match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                "Failed to parse config {}, using defaults: {}",
                config_file.display(),
                err
            );
            Config::default()
        }
    };
    Ok(sanitize_config(config))
}
