//! Durations tagged with their unit
//!
//! A [`DurationValue`] never changes once built: converting or formatting
//! produces a new value that shares the same unit registry.

use std::fmt;
use std::sync::Arc;

use lapwatch_domain::constants::BASE_UNIT;
use lapwatch_domain::{Quantity, UnitError};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::registry::UnitRegistry;

/// A number (or formatted string) together with its unit label
#[derive(Debug, Clone)]
pub struct DurationValue {
    quantity: Option<Quantity>,
    unit: String,
    units: Arc<UnitRegistry>,
}

impl DurationValue {
    /// Wrap `value`, expressed in `unit`
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use lapwatch_core::{DurationValue, UnitRegistry};
    ///
    /// let units = Arc::new(UnitRegistry::new());
    /// let one = DurationValue::new(units, 1.0, "s");
    /// let ms = one.convert("ms").unwrap();
    /// assert_eq!(ms.as_f64(), Some(1000.0));
    /// assert_eq!(ms.convert("us").unwrap().as_f64(), Some(1_000_000.0));
    /// ```
    pub fn new(
        units: Arc<UnitRegistry>,
        value: impl Into<Quantity>,
        unit: impl Into<String>,
    ) -> Self {
        Self { quantity: Some(value.into()), unit: unit.into(), units }
    }

    /// A value in seconds
    pub fn seconds(units: Arc<UnitRegistry>, seconds: f64) -> Self {
        Self::new(units, seconds, BASE_UNIT)
    }

    /// A value with no payload, only a unit label
    pub fn absent(units: Arc<UnitRegistry>, unit: impl Into<String>) -> Self {
        Self { quantity: None, unit: unit.into(), units }
    }

    /// The stored value, as is
    pub const fn get(&self) -> Option<&Quantity> {
        self.quantity.as_ref()
    }

    /// The stored value if it is a number
    pub fn as_f64(&self) -> Option<f64> {
        self.quantity.as_ref().and_then(Quantity::as_number)
    }

    /// The current unit label
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The registry used to interpret the unit label
    pub const fn units(&self) -> &Arc<UnitRegistry> {
        &self.units
    }

    /// Render the value through a two-placeholder pattern
    ///
    /// The first `%s` receives the value, the second the unit label; `%%`
    /// is a literal percent sign. The result holds the rendered string and
    /// keeps the unit label unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use lapwatch_core::{DurationValue, UnitRegistry};
    ///
    /// let value = DurationValue::new(Arc::new(UnitRegistry::new()), 12.5, "ms");
    /// let formatted = value.format("%s %s");
    /// assert_eq!(formatted.get().and_then(|q| q.as_text()), Some("12.5 ms"));
    /// assert_eq!(formatted.unit(), "ms");
    /// ```
    #[must_use]
    pub fn format(&self, pattern: &str) -> Self {
        let value = self.quantity.as_ref().map(ToString::to_string).unwrap_or_default();
        let rendered = render(pattern, [&value, &self.unit]);
        Self { quantity: Some(Quantity::Text(rendered)), unit: self.unit.clone(), units: self.units.clone() }
    }

    /// Convert to `target`, pivoting through seconds
    ///
    /// An absent value is carried over with the new label.
    ///
    /// # Errors
    /// - [`UnitError::UnknownUnit`] if `target` (or the current unit) is not
    ///   known to the registry
    /// - [`UnitError::NotNumeric`] if the value has already been formatted
    pub fn convert(&self, target: &str) -> Result<Self, UnitError> {
        if !self.units.accepts(target) {
            return Err(UnitError::UnknownUnit { unit: target.to_string() });
        }

        let quantity = match &self.quantity {
            None => None,
            Some(Quantity::Text(text)) => {
                return Err(UnitError::NotNumeric { value: text.clone() });
            }
            Some(Quantity::Number(value)) => {
                let seconds = self.units.to_seconds(*value, &self.unit)?;
                Some(Quantity::Number(self.units.from_seconds(seconds, target)?))
            }
        };

        Ok(Self { quantity, unit: target.to_string(), units: self.units.clone() })
    }
}

impl PartialEq for DurationValue {
    fn eq(&self, other: &Self) -> bool {
        self.quantity == other.quantity && self.unit == other.unit
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.quantity {
            Some(Quantity::Number(value)) => write!(f, "{value} {}", self.unit),
            Some(Quantity::Text(text)) => f.write_str(text),
            None => Ok(()),
        }
    }
}

impl Serialize for DurationValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DurationValue", 2)?;
        state.serialize_field("value", &self.quantity)?;
        state.serialize_field("unit", &self.unit)?;
        state.end()
    }
}

fn render(pattern: &str, args: [&str; 2]) -> String {
    let mut out = String::with_capacity(pattern.len() + args[0].len() + args[1].len());
    let mut args = args.into_iter();
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                // Placeholders past the second are left as written
                out.push_str(args.next().unwrap_or("%s"));
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }

    out
}
