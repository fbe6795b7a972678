// pwaicons - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for pwaicons configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/pwaicons/ or %APPDATA%\pwaicons\config\)
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

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[icons]` section.
    pub icons: IconsSection,
    /// `[manifest]` section.
    pub manifest: ManifestSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[icons]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct IconsSection {
    /// Icon sizes to generate, in order.
    pub sizes: Option<Vec<i64>>,
    /// Directory the icons are written into.
    pub output_dir: Option<String>,
}

/// `[manifest]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ManifestSection {
    /// Write the manifest icon fragment after a successful run.
    pub enabled: Option<bool>,
    /// Fragment file name, relative to the output directory.
    pub file_name: Option<String>,
    /// Prefix prepended to each icon `src`.
    pub src_prefix: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Icons --
    /// Raw sizes; each one is validated again by the renderer.
    pub sizes: Vec<i64>,
    /// Output directory.
    pub output_dir: PathBuf,

    // -- Manifest --
    pub manifest_enabled: bool,
    pub manifest_file_name: String,
    pub manifest_src_prefix: String,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sizes: constants::DEFAULT_ICON_SIZES
                .iter()
                .map(|&s| i64::from(s))
                .collect(),
            output_dir: PathBuf::from("."),
            manifest_enabled: false,
            manifest_file_name: constants::DEFAULT_MANIFEST_FILE_NAME.to_string(),
            manifest_src_prefix: constants::DEFAULT_MANIFEST_SRC_PREFIX.to_string(),
            log_level: None,
        }
    }
}

/// Load and validate a config file.
///
/// With `required == false` (the platform default location), a missing file
/// yields defaults with no warnings, and an unreadable or unparseable file
/// yields defaults plus a warning. With `required == true` (a path given on
/// the command line) those cases are hard errors.
pub fn load_config(path: &Path, required: bool) -> Result<(AppConfig, Vec<String>), ConfigError> {
    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return Ok((AppConfig::default(), Vec::new()));
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(source) if required => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                path.display()
            );
            tracing::warn!("{}", msg);
            return Ok((AppConfig::default(), vec![msg]));
        }
    };

    match parse_config(&content, path) {
        Ok(loaded) => {
            tracing::info!(path = %path.display(), "Loaded config.toml");
            Ok(loaded)
        }
        Err(e) if required => Err(e),
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            Ok((AppConfig::default(), vec![msg]))
        }
    }
}

/// Parse and validate config.toml content.
///
/// Returns the validated config and every non-fatal warning. Only a TOML
/// syntax error is fatal.
pub fn parse_config(content: &str, path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Icons: sizes --
    if let Some(sizes) = raw.icons.sizes {
        match validate_sizes(&sizes) {
            Ok(()) => config.sizes = sizes,
            Err(e) => warnings.push(format!("{e}. Using default sizes.")),
        }
    }

    // -- Icons: output_dir --
    if let Some(dir) = raw.icons.output_dir {
        if dir.trim().is_empty() {
            warnings.push("[icons] output_dir is empty. Using default (.).".to_string());
        } else {
            config.output_dir = PathBuf::from(dir);
        }
    }

    // -- Manifest --
    if let Some(enabled) = raw.manifest.enabled {
        config.manifest_enabled = enabled;
    }
    if let Some(name) = raw.manifest.file_name {
        if is_plain_file_name(&name) {
            config.manifest_file_name = name;
        } else {
            warnings.push(format!(
                "[manifest] file_name = \"{name}\" must be a plain file name. Using default ({}).",
                constants::DEFAULT_MANIFEST_FILE_NAME,
            ));
        }
    }
    if let Some(prefix) = raw.manifest.src_prefix {
        config.manifest_src_prefix = prefix;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    Ok((config, warnings))
}

/// Check a configured size list: non-empty, bounded length, every entry in
/// range, no duplicates.
fn validate_sizes(sizes: &[i64]) -> Result<(), ConfigError> {
    let out_of_range = |value: String, expected: String| ConfigError::ValueOutOfRange {
        field: "[icons] sizes".to_string(),
        value,
        expected,
    };

    if sizes.is_empty() || sizes.len() > constants::MAX_SIZE_COUNT {
        return Err(out_of_range(
            format!("{} entries", sizes.len()),
            format!("1-{} entries", constants::MAX_SIZE_COUNT),
        ));
    }
    let max = i64::from(constants::MAX_ICON_SIZE);
    if let Some(bad) = sizes.iter().find(|s| !(1..=max).contains(*s)) {
        return Err(out_of_range(bad.to_string(), format!("1-{max}")));
    }
    for (i, size) in sizes.iter().enumerate() {
        if sizes[..i].contains(size) {
            return Err(out_of_range(
                format!("{size} (duplicate)"),
                "each size listed once".to_string(),
            ));
        }
    }
    Ok(())
}

fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty() && path.file_name().map(|f| f == path.as_os_str()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> (AppConfig, Vec<String>) {
        parse_config(content, Path::new("config.toml")).unwrap()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let (config, warnings) = parse("");
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(config.sizes, vec![72, 96, 128, 144, 152, 192, 384, 512]);
    }

    #[test]
    fn valid_sections_are_applied() {
        let (config, warnings) = parse(
            r#"
            [icons]
            sizes = [48, 96]
            output_dir = "static/icons"

            [manifest]
            enabled = true
            file_name = "manifest-icons.json"
            src_prefix = "/icons/"

            [logging]
            level = "debug"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.sizes, vec![48, 96]);
        assert_eq!(config.output_dir, PathBuf::from("static/icons"));
        assert!(config.manifest_enabled);
        assert_eq!(config.manifest_file_name, "manifest-icons.json");
        assert_eq!(config.manifest_src_prefix, "/icons/");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_sizes_fall_back_with_warning() {
        for bad in ["[]", "[72, 0]", "[72, -5]", "[72, 72]", "[99999]"] {
            let (config, warnings) = parse(&format!("[icons]\nsizes = {bad}\n"));
            assert_eq!(config.sizes, AppConfig::default().sizes, "{bad}");
            assert_eq!(warnings.len(), 1, "{bad}: {warnings:?}");
            assert!(warnings[0].contains("[icons] sizes"), "{}", warnings[0]);
        }
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let (config, warnings) = parse("[logging]\nlevel = \"loud\"\n");
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn manifest_file_name_must_not_contain_directories() {
        let (config, warnings) = parse("[manifest]\nfile_name = \"../escape.json\"\n");
        assert_eq!(config.manifest_file_name, "icons.json");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (_, warnings) = parse("[future]\nthing = 1\n[icons]\nextra = true\n");
        assert!(warnings.is_empty());
    }

    #[test]
    fn syntax_error_is_fatal_in_parse() {
        let err = parse_config("[icons\nsizes = ", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse { .. }));
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"), false).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.toml"), true).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn unparseable_optional_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let (config, warnings) = load_config(&path, false).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Using defaults"));
    }
}
