//! Time utilities and abstractions
//!
//! - **[`clock`]**: real and mock monotonic clocks
//! - **[`format`]**: human-readable elapsed time formatting
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "runtime")]
//! # {
//! use std::time::Duration;
//!
//! use lapwatch_common::time::{format_elapsed, Clock, MockClock};
//!
//! let clock = MockClock::new();
//! let start = clock.now();
//! clock.advance(Duration::from_secs(3665));
//! assert_eq!(format_elapsed(clock.now() - start), "1h 1m 5s");
//! # }
//! ```

#[cfg(feature = "runtime")]
pub mod clock;
pub mod format;

// Re-export commonly used items
#[cfg(feature = "runtime")]
pub use clock::{Clock, MockClock, SystemClock};
pub use format::{format_elapsed, format_elapsed_secs};
