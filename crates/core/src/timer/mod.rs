//! Named timers with pauses and laps
//!
//! - **[`store`]**: single-owner state machine
//! - **[`shared`]**: cloneable handle for use across threads

mod record;
pub mod shared;
pub mod store;

pub use shared::SharedTimerStore;
pub use store::{TimerDuration, TimerStore};
