//! Configuration loading and validation
//!
//! The [`Config`] structures live in `lapwatch-domain`; this module finds and
//! parses them, and turns them into a validated [`UnitRegistry`].

pub mod loader;

use lapwatch_common::error::CommonError;
use lapwatch_domain::{Config, LapwatchError};

use crate::units::UnitRegistry;

pub(crate) const ID_BYTES_FIELD: &str = "execution.id_bytes";

pub use loader::{
    apply_env_overrides, apply_overrides_from, load, load_from_file, parse_config,
    probe_config_paths,
};

/// Validate `config` and build the unit registry it describes
///
/// Custom units are registered in declaration order, then the configured
/// default units are checked against the result.
///
/// # Errors
/// - [`LapwatchError::Common`] (validation) if `execution.id_bytes` is 0
/// - [`LapwatchError::Unit`] if a custom unit is rejected
/// - [`LapwatchError::Common`] (configuration) if `durations.unit` or
///   `execution.unit` is unknown
pub fn registry_from_config(config: &Config) -> Result<UnitRegistry, LapwatchError> {
    if config.execution.id_bytes == 0 {
        return Err(CommonError::validation_with_value(
            ID_BYTES_FIELD,
            "must be a positive integer",
            "0",
        )
        .into());
    }

    let registry = UnitRegistry::from_config(&config.units)?;

    for (field, unit) in
        [("durations.unit", &config.durations.unit), ("execution.unit", &config.execution.unit)]
    {
        if !registry.accepts(unit) {
            return Err(CommonError::config_field(field, format!("Unknown unit '{unit}'")).into());
        }
    }

    Ok(registry)
}
