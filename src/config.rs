//! Configuration: defaults → config file → CLI flags.
//!
//! The file lives at `<config dir>/thermoconv/config.toml` and every key
//! is optional. A missing file is the same as an empty one.
//!
//! ```toml
//! default_unit = "fahrenheit"   # celsius | fahrenheit | kelvin
//! log_level = "debug"           # off | error | warn | info | debug | trace
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn, LevelFilter};
use serde::Deserialize;

use crate::error::AppError;
use crate::types::TemperatureUnit;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Raw file contents. `None` means "not set here".
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThermoConfig {
    pub default_unit: Option<TemperatureUnit>,
    pub log_level: Option<String>,
}

/// Where the loaded config came from.
///
/// Loading runs before the logger exists, so the outcome is carried here
/// and logged by [`log_outcome`] once logging is up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    NoConfigDir,
}

/// Concrete settings after all layers are collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub initial_unit: TemperatureUnit,
    pub log_level: LevelFilter,
    /// A `log_level` value that was not understood and fell back to the default.
    pub rejected_log_level: Option<String>,
}

/// `<config dir>/thermoconv/config.toml`, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("thermoconv").join("config.toml"))
}

/// `<cache dir>/thermoconv/thermoconv.log`, if the platform has a cache dir.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("thermoconv").join("thermoconv.log"))
}

/// Load the user's config file, falling back to defaults when absent.
pub fn load_config() -> Result<(ThermoConfig, ConfigSource), AppError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((ThermoConfig::default(), ConfigSource::NoConfigDir)),
    }
}

/// Load config from an explicit path. Missing file → defaults.
pub fn load_config_from(path: &Path) -> Result<(ThermoConfig, ConfigSource), AppError> {
    if !path.exists() {
        return Ok((ThermoConfig::default(), ConfigSource::Missing(path.to_path_buf())));
    }

    let contents = fs::read_to_string(path)?;
    let config: ThermoConfig = toml::from_str(&contents)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Collapse defaults, file values and CLI flags. CLI wins.
pub fn resolve(config: &ThermoConfig, cli_unit: Option<TemperatureUnit>) -> ResolvedConfig {
    let initial_unit = cli_unit.or(config.default_unit).unwrap_or_default();

    let (log_level, rejected_log_level) = match config.log_level.as_deref() {
        Some(raw) => match LevelFilter::from_str(raw) {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LOG_LEVEL, Some(raw.to_string())),
        },
        None => (DEFAULT_LOG_LEVEL, None),
    };

    ResolvedConfig { initial_unit, log_level, rejected_log_level }
}

/// Log how the config was loaded and resolved. Call after logging is set up.
pub fn log_outcome(source: &ConfigSource, resolved: &ResolvedConfig) {
    match source {
        ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
        ConfigSource::Missing(path) => {
            info!("No config file at {}, using defaults", path.display())
        }
        ConfigSource::NoConfigDir => warn!("Could not determine config directory, using defaults"),
    }

    if let Some(raw) = &resolved.rejected_log_level {
        warn!("Unknown log_level '{}', using {}", raw, DEFAULT_LOG_LEVEL);
    }
}
