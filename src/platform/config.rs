// PresetScrub - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation. Only ambient settings live here: the exclusion rules and
// the target path are never configurable.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PresetScrub configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/presetscrub/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of `config.toml`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate `config.toml` at `config_path`.
///
/// A missing file yields defaults with no warnings. Unreadable or invalid
/// files yield defaults plus the errors that explain why; a bad config
/// never stops the scrub from running.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(ConfigError::InvalidValue {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, warnings)
}
