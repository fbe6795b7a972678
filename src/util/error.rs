// pwaicons - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every I/O failure carries the path (and icon size, where one applies) so a
// failed run names exactly which artifact could not be produced.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all pwaicons operations.
#[derive(Debug)]
pub enum IconError {
    /// A size outside `1..=MAX_ICON_SIZE` was supplied to the renderer.
    InvalidArgument { value: i64, reason: &'static str },

    /// Creating, writing, or flushing an output file failed.
    Io {
        path: PathBuf,
        size: Option<u32>,
        operation: &'static str,
        source: io::Error,
    },

    /// Manifest fragment could not be produced.
    Manifest(ManifestError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// One or more sizes in a batch failed. The remaining sizes were still
    /// processed; `failures` holds every per-size error in input order.
    Batch {
        total: usize,
        failures: Vec<IconError>,
    },
}

impl IconError {
    /// Shorthand for the invalid size case.
    pub fn invalid_size(value: i64, reason: &'static str) -> Self {
        Self::InvalidArgument { value, reason }
    }

    /// True for the `InvalidArgument` variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { value, reason } => {
                write!(f, "Invalid icon size {value}: {reason}")
            }
            Self::Io {
                path,
                size: Some(size),
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} of {size}x{size} icon '{}': {source}",
                path.display()
            ),
            Self::Io {
                path,
                size: None,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Manifest(e) => write!(f, "Manifest error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Batch { total, failures } => write!(
                f,
                "{} of {total} icons failed to generate",
                failures.len()
            ),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Manifest(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Batch { failures, .. } => failures
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
            Self::InvalidArgument { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest errors
// ---------------------------------------------------------------------------

/// Errors related to writing the PWA manifest icon fragment.
#[derive(Debug)]
pub enum ManifestError {
    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { path, source } => {
                write!(f, "JSON manifest error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ManifestError> for IconError {
    fn from(e: ManifestError) -> Self {
        Self::Manifest(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
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
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
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
            _ => None,
        }
    }
}

impl From<ConfigError> for IconError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for pwaicons results.
pub type Result<T> = std::result::Result<T, IconError>;
