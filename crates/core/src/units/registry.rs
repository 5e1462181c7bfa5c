//! Registry of supported time units
//!
//! Seconds are the pivot every conversion routes through and are never
//! stored as a definition. Every other unit, built-in or custom, is a single
//! arithmetic step away from seconds.

use std::collections::HashMap;

use lapwatch_domain::constants::{BASE_UNIT, BUILTIN_UNITS};
use lapwatch_domain::{CustomUnitConfig, Operator, UnitDefinition, UnitError};
use tracing::debug;

/// Known units and their conversion rules
///
/// Units can be added but never removed or redefined, so a name that
/// resolves once keeps resolving to the same rule.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRegistry {
    supported: Vec<String>,
    definitions: HashMap<String, UnitDefinition>,
    custom: Vec<String>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    /// Create a registry holding the built-in units (`m`, `ms`, `us`, `ns`)
    pub fn new() -> Self {
        let mut supported = Vec::with_capacity(BUILTIN_UNITS.len());
        let mut definitions = HashMap::with_capacity(BUILTIN_UNITS.len());
        for (name, operator, value) in BUILTIN_UNITS {
            supported.push(name.to_string());
            definitions.insert(name.to_string(), UnitDefinition::new(operator, value));
        }
        Self { supported, definitions, custom: Vec::new() }
    }

    /// Create a registry with the built-ins plus the units declared in
    /// configuration, registered in declaration order
    pub fn from_config(units: &[CustomUnitConfig]) -> Result<Self, UnitError> {
        let mut registry = Self::new();
        for unit in units {
            registry.add(&unit.name, &unit.operator, unit.value)?;
        }
        Ok(registry)
    }

    /// Register a custom unit
    ///
    /// `operator` is one of `+`, `-`, `*`, `/` and describes how a number of
    /// seconds becomes a number of this unit.
    ///
    /// # Errors
    /// - [`UnitError::InvalidUnitName`] if `name` is empty, the base unit, or
    ///   already known (built-ins included)
    /// - [`UnitError::UnsupportedOperator`] for any other operator
    /// - [`UnitError::DivisionByZero`] if `value` is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use lapwatch_core::UnitRegistry;
    ///
    /// let mut units = UnitRegistry::new();
    /// units.add("custom", "*", 500.0).unwrap();
    /// assert!(units.supported_units().iter().any(|u| u == "custom"));
    /// assert_eq!(units.custom_units(), ["custom"]);
    /// ```
    pub fn add(&mut self, name: &str, operator: &str, value: f64) -> Result<(), UnitError> {
        self.check_name(name)?;
        let operator: Operator = operator.parse()?;
        self.insert(name, UnitDefinition::new(operator, value))
    }

    /// Register a custom unit from an already-parsed definition
    ///
    /// # Errors
    /// Same as [`UnitRegistry::add`], minus the operator check.
    pub fn add_definition(&mut self, name: &str, definition: UnitDefinition) -> Result<(), UnitError> {
        self.check_name(name)?;
        self.insert(name, definition)
    }

    /// Store a definition whose name is already checked
    fn insert(&mut self, name: &str, definition: UnitDefinition) -> Result<(), UnitError> {
        if definition.value == 0.0 {
            return Err(UnitError::DivisionByZero { name: name.to_string() });
        }

        self.supported.push(name.to_string());
        self.definitions.insert(name.to_string(), definition);
        self.custom.push(name.to_string());
        debug!(unit = name, operator = %definition.operator, value = definition.value, "Registered custom unit");
        Ok(())
    }

    /// All known unit names, built-ins first, in registration order
    ///
    /// The base unit `s` is not listed; it is always convertible.
    pub fn supported_units(&self) -> &[String] {
        &self.supported
    }

    /// Only the units added through [`UnitRegistry::add`], in add order
    pub fn custom_units(&self) -> &[String] {
        &self.custom
    }

    /// The conversion rule for a non-base unit
    ///
    /// Returns `None` for unknown names and for the base unit.
    pub fn definition(&self, name: &str) -> Option<UnitDefinition> {
        self.definitions.get(name).copied()
    }

    /// Whether `name` is in the supported list
    pub fn is_supported(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Whether a value can be converted to `name`: any supported unit, or
    /// the base unit
    pub fn accepts(&self, name: &str) -> bool {
        name == BASE_UNIT || self.is_supported(name)
    }

    /// Express `value`, measured in `unit`, in seconds
    ///
    /// # Errors
    /// [`UnitError::UnknownUnit`] if `unit` is not accepted.
    pub fn to_seconds(&self, value: f64, unit: &str) -> Result<f64, UnitError> {
        if unit == BASE_UNIT {
            return Ok(value);
        }
        self.require(unit).map(|definition| definition.to_seconds(value))
    }

    /// Express a number of seconds in `unit`
    ///
    /// # Errors
    /// [`UnitError::UnknownUnit`] if `unit` is not accepted.
    pub fn from_seconds(&self, seconds: f64, unit: &str) -> Result<f64, UnitError> {
        if unit == BASE_UNIT {
            return Ok(seconds);
        }
        self.require(unit).map(|definition| definition.from_seconds(seconds))
    }

    fn require(&self, unit: &str) -> Result<UnitDefinition, UnitError> {
        self.definition(unit).ok_or_else(|| UnitError::UnknownUnit { unit: unit.to_string() })
    }

    fn check_name(&self, name: &str) -> Result<(), UnitError> {
        if name.is_empty() || name == BASE_UNIT || self.is_supported(name) {
            return Err(UnitError::InvalidUnitName { name: name.to_string() });
        }
        Ok(())
    }
}
