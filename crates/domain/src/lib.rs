//! # Lapwatch Domain
//!
//! Plain data shared by the lapwatch crates.
//!
//! This crate contains:
//! - Unit operators and definitions
//! - Timer status, events and snapshots
//! - Error types and the `Result` alias
//! - Configuration structures and defaults
//!
//! ## Architecture
//! - Only depends on `lapwatch-common`
//! - No clocks, registries or stores; behaviour lives in `lapwatch-core`

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{Config, CustomUnitConfig, DurationsOptions, ExecutionConfig};
pub use errors::{BoxedError, ExecutionError, LapwatchError, Result, TimerError, UnitError};
pub use types::{
    Direction, Operator, Quantity, TimerEvent, TimerSnapshot, TimerStatus, UnitDefinition,
};
