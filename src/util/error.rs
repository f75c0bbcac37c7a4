// PresetScrub - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every pipeline failure is fatal; nothing here is recovered locally.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by the load/filter/save pipeline.
#[derive(Debug)]
pub enum ScrubError {
    /// The target path does not exist.
    FileNotFound { path: PathBuf },

    /// I/O failure while loading the target (includes invalid UTF-8).
    Read { path: PathBuf, source: io::Error },

    /// I/O failure while writing the filtered content back.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScrubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(f, "File '{}' does not exist", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ScrubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileNotFound { .. } => None,
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// These never abort a run: they are reported as warnings and the
/// defaults are used instead.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is not one of the accepted values.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not recognised. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Convenience type alias for pipeline results.
pub type Result<T> = std::result::Result<T, ScrubError>;
