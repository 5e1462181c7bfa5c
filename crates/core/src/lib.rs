//! # Lapwatch Core
//!
//! Timer state machine and unit-conversion engine.
//!
//! This crate contains:
//! - The unit registry and unit-tagged duration values
//! - Named timers with pauses, resumes and laps
//! - A callback timing service
//! - Configuration loading
//!
//! ## Architecture Principles
//! - Depends on `lapwatch-common` and `lapwatch-domain` only
//! - Time is read through the `Clock` trait, ids through `IdGenerator`
//! - Synchronous; callers that share a store use `SharedTimerStore`
//!
//! ## Usage
//!
//! ```
//! use lapwatch_core::TimerStore;
//!
//! let mut timers = TimerStore::new();
//! timers.start("parse");
//! timers.lap("parse", "tokens").unwrap();
//! timers.stop("parse").unwrap();
//!
//! let elapsed = timers.calculate("parse").unwrap().unwrap();
//! let ms = elapsed.convert("ms").unwrap();
//! assert_eq!(ms.unit(), "ms");
//! ```

pub mod config;
mod diagnostics;
pub mod execution;
pub mod timer;
pub mod units;

// Re-export commonly used items
pub use execution::{CallbackTimer, ExecutionReport, IdGenerator, RandomIdGenerator};
pub use timer::{SharedTimerStore, TimerDuration, TimerStore};
pub use units::{DurationValue, UnitRegistry};
