//! Domain types and models

pub mod quantity;
pub mod timer;
pub mod unit;

pub use quantity::Quantity;
pub use timer::{TimerEvent, TimerSnapshot, TimerStatus};
pub use unit::{Direction, Operator, UnitDefinition};
