//! Testing utilities and helpers
//!
//! - **[`assertions`]**: float tolerance and error message assertions
//! - Clock mocking lives in [`crate::time::clock`] and is re-exported here
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "runtime")]
//! # {
//! use lapwatch_common::testing::{assert_approx_eq, MockClock};
//!
//! let clock = MockClock::new();
//! clock.advance(std::time::Duration::from_millis(1500));
//! assert_approx_eq(clock.elapsed().as_secs_f64(), 1.5, 1e-9);
//!
//! let result: Result<(), String> = Err("Timer 'build' has not been started".to_string());
//! lapwatch_common::assert_error_contains!(result, "not been started");
//! # }
//! ```

pub mod assertions;

pub use assertions::{assert_approx_eq, assert_duration_in_range};

pub use crate::time::{Clock, MockClock, SystemClock};
