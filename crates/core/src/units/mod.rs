//! Unit registry and unit-tagged durations

pub mod registry;
pub mod value;

pub use registry::UnitRegistry;
pub use value::DurationValue;
