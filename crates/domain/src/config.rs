//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DURATIONS_FORMAT, DEFAULT_DURATIONS_UNIT, DEFAULT_EXECUTION_ID_BYTES,
    DEFAULT_EXECUTION_UNIT,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub durations: DurationsOptions,
    pub execution: ExecutionConfig,
    pub units: Vec<CustomUnitConfig>,
}

/// Options for reporting every completed timer at once
///
/// `format` takes two `%s` placeholders, filled with the value and then the
/// unit label. `None` or an empty string skips formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationsOptions {
    pub unit: String,
    pub format: Option<String>,
}

impl Default for DurationsOptions {
    fn default() -> Self {
        Self {
            unit: DEFAULT_DURATIONS_UNIT.to_string(),
            format: Some(DEFAULT_DURATIONS_FORMAT.to_string()),
        }
    }
}

impl DurationsOptions {
    /// Report in `unit` with the default format
    pub fn in_unit(unit: impl Into<String>) -> Self {
        Self { unit: unit.into(), ..Self::default() }
    }

    /// Replace the format pattern
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Disable formatting
    #[must_use]
    pub fn without_format(mut self) -> Self {
        self.format = None;
        self
    }

    /// The format pattern, if formatting is enabled
    pub fn pattern(&self) -> Option<&str> {
        self.format.as_deref().filter(|pattern| !pattern.is_empty())
    }
}

/// Callback timing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Unit used by `watch` when the caller does not name one
    pub unit: String,
    /// Random bytes drawn for each private timer id
    pub id_bytes: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self { unit: DEFAULT_EXECUTION_UNIT.to_string(), id_bytes: DEFAULT_EXECUTION_ID_BYTES }
    }
}

/// A custom unit declared in configuration
///
/// The operator stays a string so that registration reports an unsupported
/// operator the same way a programmatic `add` does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomUnitConfig {
    pub name: String,
    pub operator: String,
    pub value: f64,
}
