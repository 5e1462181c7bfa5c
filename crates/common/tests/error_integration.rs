//! Integration tests for `lapwatch_common::error`.
//!
//! These suites validate classification, rendering and module error
//! delegation so downstream crates receive consistent failure semantics.

use lapwatch_common::error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
use thiserror::Error;

/// Validates that `CommonError` classification surfaces the expected
/// retryable, severity and criticality combinations for each variant.
///
/// Assertions:
/// - Confirms no variant is retryable or critical.
/// - Confirms every variant is logged at error level.
#[test]
fn classification_matrix_matches_expected_contract() {
    let cases = vec![
        CommonError::config("missing unit"),
        CommonError::config_field("durations.unit", "Unknown unit 'h'"),
        CommonError::validation_with_value("execution.id_bytes", "must be at least 1", "0"),
    ];

    for err in cases {
        assert!(!err.is_retryable(), "{err}");
        assert_eq!(err.severity(), ErrorSeverity::Error, "{err}");
        assert!(!err.is_critical(), "{err}");
    }
}

/// Validates the offending key is reachable without matching variants.
///
/// Assertions:
/// - Confirms `field()` is set for field errors and validation errors.
/// - Confirms bare configuration errors carry no field.
#[test]
fn field_is_exposed_for_keyed_errors() {
    let keyed = CommonError::config_field("durations.unit", "Unknown unit 'h'");
    assert_eq!(keyed.field(), Some("durations.unit"));

    let invalid = CommonError::validation_with_value("execution.id_bytes", "must be at least 1", "0");
    assert_eq!(invalid.field(), Some("execution.id_bytes"));
    assert!(invalid.to_string().contains("(value: '0')"));

    let bare = CommonError::config("No config file found");
    assert_eq!(bare.field(), None);
    assert_eq!(bare.to_string(), "Configuration error: No config file found");
}

/// Validates `CommonResult` composes with `?` in fallible helpers.
#[test]
fn common_result_propagates() {
    fn positive(field: &str, raw: i64) -> CommonResult<u64> {
        u64::try_from(raw)
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| CommonError::validation_with_value(field, "must be positive", raw.to_string()))
    }

    fn sum(a: i64, b: i64) -> CommonResult<u64> {
        Ok(positive("a", a)? + positive("b", b)?)
    }

    assert_eq!(sum(2, 3), Ok(5));
    let err = sum(2, -1).unwrap_err();
    assert_eq!(err.field(), Some("b"));
}

#[derive(Debug, Error)]
enum StopwatchError {
    #[error("stopwatch '{0}' is not running")]
    NotRunning(String),

    #[error(transparent)]
    Common(#[from] CommonError),
}

impl ErrorClassification for StopwatchError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Common(e) => e.is_retryable(),
            Self::NotRunning(_) => false,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Common(e) => e.severity(),
            Self::NotRunning(_) => ErrorSeverity::Warning,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Common(e) if e.is_critical())
    }
}

/// Validates module errors composed with `CommonError` delegate
/// classification and display.
#[test]
fn module_errors_delegate_to_common() {
    let own = StopwatchError::NotRunning("lap".into());
    assert_eq!(own.severity(), ErrorSeverity::Warning);
    assert_eq!(own.to_string(), "stopwatch 'lap' is not running");

    let wrapped: StopwatchError = CommonError::config_field("execution.unit", "Unknown unit 'h'").into();
    assert!(!wrapped.is_retryable());
    assert_eq!(wrapped.severity(), ErrorSeverity::Error);
    assert_eq!(
        wrapped.to_string(),
        "Configuration error in field 'execution.unit': Unknown unit 'h'"
    );
}

/// Validates severities order from least to most urgent.
#[test]
fn severity_ordering_and_labels() {
    let mut levels =
        vec![ErrorSeverity::Critical, ErrorSeverity::Info, ErrorSeverity::Error, ErrorSeverity::Warning];
    levels.sort();
    let labels: Vec<String> = levels.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["INFO", "WARN", "ERROR", "CRITICAL"]);
}
