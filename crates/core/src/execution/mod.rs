//! Timing of caller-supplied callbacks
//!
//! - **[`service`]**: [`CallbackTimer`] and its report type
//! - **[`ports`]**: the private id source

pub mod ports;
pub mod service;

pub use ports::{IdGenerator, RandomIdGenerator};
pub use service::{CallbackTimer, ExecutionReport};
