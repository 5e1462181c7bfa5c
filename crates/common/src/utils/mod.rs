//! Common utility functions
//!
//! - **[`id`]**: random identifiers for ephemeral timers

pub mod id;

// Re-export commonly used items for convenience
pub use self::id::random_hex_id;
