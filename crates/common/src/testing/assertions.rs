//! Custom assertions for testing
//!
//! Provides assertion macros and functions for common testing scenarios.

// These assertions are designed to panic on failure
#![allow(clippy::missing_panics_doc)]

use std::time::Duration;

/// Assert that an error contains a specific substring
///
/// # Examples
///
/// ```
/// let result: Result<(), String> = Err("Unknown unit: 'fortnight'".to_string());
/// lapwatch_common::assert_error_contains!(result, "fortnight");
/// ```
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $substring:expr) => {
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(
                    error_msg.contains($substring),
                    "Error message '{}' does not contain '{}'",
                    error_msg,
                    $substring
                );
            }
        }
    };
}

/// Assert that two values are approximately equal (for floats)
///
/// # Examples
///
/// ```
/// use lapwatch_common::testing::assertions::assert_approx_eq;
///
/// assert_approx_eq(1.0 / 60.0 * 60.0, 1.0, 1e-12);
/// ```
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Values not approximately equal: {} vs {} (diff: {})",
        actual,
        expected,
        diff
    );
}

/// Assert that a duration is within an acceptable range
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use lapwatch_common::testing::assertions::assert_duration_in_range;
///
/// let actual = Duration::from_millis(105);
/// assert_duration_in_range(actual, Duration::from_millis(100), Duration::from_millis(10));
/// ```
pub fn assert_duration_in_range(actual: Duration, expected: Duration, tolerance: Duration) {
    let min = expected.saturating_sub(tolerance);
    let max = expected + tolerance;

    assert!(
        actual >= min && actual <= max,
        "Duration {:?} not in range [{:?}, {:?}]",
        actual,
        min,
        max
    );
}
