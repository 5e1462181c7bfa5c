//! Domain constants
//!
//! Centralized location for unit names and defaults used throughout the
//! workspace.

use crate::types::Operator;

// Units
pub const BASE_UNIT: &str = "s";
pub const MINUTE_UNIT: &str = "m";
pub const MILLISECOND_UNIT: &str = "ms";
pub const MICROSECOND_UNIT: &str = "us";
pub const NANOSECOND_UNIT: &str = "ns";

/// Built-in units, expressed as the operation that turns seconds into them.
pub const BUILTIN_UNITS: [(&str, Operator, f64); 4] = [
    (MINUTE_UNIT, Operator::Divide, 60.0),
    (MILLISECOND_UNIT, Operator::Multiply, 1_000.0),
    (MICROSECOND_UNIT, Operator::Multiply, 1_000_000.0),
    (NANOSECOND_UNIT, Operator::Multiply, 1_000_000_000.0),
];

// Reporting defaults
pub const DEFAULT_DURATIONS_UNIT: &str = MILLISECOND_UNIT;
pub const DEFAULT_DURATIONS_FORMAT: &str = "%s %s";

// Callback timing defaults
pub const DEFAULT_EXECUTION_UNIT: &str = BASE_UNIT;
pub const DEFAULT_EXECUTION_ID_BYTES: usize = 16;
