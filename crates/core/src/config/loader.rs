//! Configuration loader
//!
//! Loads lapwatch configuration from a file, then lets environment variables
//! override individual keys.
//!
//! ## Loading Strategy
//! 1. Probe the standard paths for a config file
//! 2. Parse it (TOML or JSON, by extension), or start from defaults
//! 3. Apply environment overrides
//!
//! ## Environment Variables
//! - `LAPWATCH_DURATIONS_UNIT`: unit for `durations` reports
//! - `LAPWATCH_DURATIONS_FORMAT`: format pattern (empty disables formatting)
//! - `LAPWATCH_EXECUTION_UNIT`: default unit for timed callbacks
//! - `LAPWATCH_EXECUTION_ID_BYTES`: random bytes per private timer id
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./lapwatch.toml`
//! 2. `./lapwatch.json`
//! 3. `./config/lapwatch.toml`

use std::path::{Path, PathBuf};

use lapwatch_common::error::{CommonError, CommonResult};
use lapwatch_domain::Config;

use super::ID_BYTES_FIELD;

const CONFIG_CANDIDATES: [&str; 3] = ["lapwatch.toml", "lapwatch.json", "config/lapwatch.toml"];

/// Load configuration from the first config file found, then apply
/// environment overrides
///
/// Missing files are not an error: defaults are used instead.
///
/// # Errors
/// Returns `CommonError::Config` if a found file cannot be read or parsed,
/// and `CommonError::Validation` if an override has an invalid value.
pub fn load() -> CommonResult<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `CommonError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> CommonResult<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CommonError::config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CommonError::config("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CommonError::config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.toml` or `.json`); files without
/// an extension are read as TOML.
///
/// # Errors
/// Returns `CommonError::Config` if the format is unsupported or parsing
/// fails.
pub fn parse_config(contents: &str, path: &Path) -> CommonResult<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CommonError::config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CommonError::config(format!("Invalid JSON format: {e}"))),
        _ => Err(CommonError::config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard paths for a configuration file
///
/// Returns the first existing file relative to the current directory.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let found = CONFIG_CANDIDATES.iter().map(|candidate| cwd.join(candidate)).find(|p| p.is_file());

    if let Some(path) = &found {
        tracing::debug!(path = %path.display(), "Found config file");
    }
    found
}

/// Apply `LAPWATCH_*` environment variables on top of `config`
///
/// # Errors
/// Returns `CommonError::Validation` if `LAPWATCH_EXECUTION_ID_BYTES` is not
/// a positive integer.
pub fn apply_env_overrides(config: &mut Config) -> CommonResult<()> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup` instead of the process environment
///
/// # Errors
/// See [`apply_env_overrides`].
pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> CommonResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(unit) = lookup("LAPWATCH_DURATIONS_UNIT") {
        config.durations.unit = unit;
    }
    if let Some(format) = lookup("LAPWATCH_DURATIONS_FORMAT") {
        config.durations.format = Some(format);
    }
    if let Some(unit) = lookup("LAPWATCH_EXECUTION_UNIT") {
        config.execution.unit = unit;
    }
    if let Some(raw) = lookup("LAPWATCH_EXECUTION_ID_BYTES") {
        config.execution.id_bytes = raw
            .parse::<usize>()
            .ok()
            .filter(|bytes| *bytes > 0)
            .ok_or_else(|| {
                CommonError::validation_with_value(
                    ID_BYTES_FIELD,
                    "must be a positive integer",
                    raw.as_str(),
                )
            })?;
    }

    Ok(())
}
