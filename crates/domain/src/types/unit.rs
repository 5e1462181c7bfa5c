//! Unit conversion rules
//!
//! Every unit other than seconds is described by one arithmetic step that
//! turns a number of seconds into that unit. Running the step in reverse
//! turns the unit back into seconds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnitError;

/// Arithmetic operator of a unit definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

/// Which way an operator is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Seconds into the unit
    Forward,
    /// The unit back into seconds; the operator is inverted
    Reverse,
}

impl Operator {
    /// The operator's symbol as written in configuration
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply `value <op> factor`, or its inverse when `direction` is
    /// [`Direction::Reverse`]
    ///
    /// # Examples
    ///
    /// ```
    /// use lapwatch_domain::{Direction, Operator};
    ///
    /// assert_eq!(Operator::Multiply.apply(2.0, 1000.0, Direction::Forward), 2000.0);
    /// assert_eq!(Operator::Multiply.apply(2000.0, 1000.0, Direction::Reverse), 2.0);
    /// assert_eq!(Operator::Subtract.apply(5.0, 1.0, Direction::Reverse), 6.0);
    /// ```
    #[must_use]
    pub fn apply(self, value: f64, factor: f64, direction: Direction) -> f64 {
        match (self, direction) {
            (Self::Add, Direction::Forward) | (Self::Subtract, Direction::Reverse) => value + factor,
            (Self::Subtract, Direction::Forward) | (Self::Add, Direction::Reverse) => value - factor,
            (Self::Multiply, Direction::Forward) | (Self::Divide, Direction::Reverse) => {
                value * factor
            }
            (Self::Divide, Direction::Forward) | (Self::Multiply, Direction::Reverse) => {
                value / factor
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(UnitError::UnsupportedOperator { operator: other.to_string() }),
        }
    }
}

/// Conversion rule of a non-base unit relative to seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub operator: Operator,
    pub value: f64,
}

impl UnitDefinition {
    /// Create a definition without validating the factor
    pub const fn new(operator: Operator, value: f64) -> Self {
        Self { operator, value }
    }

    /// Convert a number of seconds into this unit
    #[must_use]
    pub fn from_seconds(&self, seconds: f64) -> f64 {
        self.operator.apply(seconds, self.value, Direction::Forward)
    }

    /// Convert a number expressed in this unit back into seconds
    #[must_use]
    pub fn to_seconds(&self, value: f64) -> f64 {
        self.operator.apply(value, self.value, Direction::Reverse)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for types::unit.
    use super::*;

    /// Validates `Operator::from_str` for every supported symbol.
    ///
    /// Assertions:
    /// - Confirms parsing and `symbol()` agree.
    /// - Confirms `^` is rejected as an unsupported operator.
    #[test]
    fn test_operator_parse_roundtrip() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }

        let err = "^".parse::<Operator>().unwrap_err();
        assert_eq!(err, UnitError::UnsupportedOperator { operator: "^".to_string() });
        assert!(err.is_unsupported_logic());
    }

    /// Validates `Operator::apply` inverts every operator in reverse mode.
    ///
    /// Assertions:
    /// - Confirms forward then reverse returns the input.
    #[test]
    fn test_apply_reverse_inverts_forward() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
            let forward = op.apply(3.0, 4.0, Direction::Forward);
            assert_eq!(op.apply(forward, 4.0, Direction::Reverse), 3.0, "operator {op}");
        }
    }

    /// Validates `UnitDefinition` for the minute rule.
    ///
    /// Assertions:
    /// - Confirms 1 second is exactly `1/60` of a minute, unrounded.
    #[test]
    fn test_minute_definition() {
        let minute = UnitDefinition::new(Operator::Divide, 60.0);
        assert_eq!(minute.from_seconds(1.0), 1.0 / 60.0);
        assert_eq!(minute.to_seconds(2.0), 120.0);
    }

    /// Validates serde renames for `Operator`.
    #[test]
    fn test_operator_serde_symbols() {
        let json = serde_json::to_string(&UnitDefinition::new(Operator::Multiply, 500.0)).unwrap();
        assert_eq!(json, r#"{"operator":"*","value":500.0}"#);
    }
}
