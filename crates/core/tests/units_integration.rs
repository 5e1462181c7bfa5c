//! Integration tests for unit registration and conversion.

mod support;

use std::sync::Arc;
use std::time::Duration;

use lapwatch_common::assert_error_contains;
use lapwatch_common::testing::assert_approx_eq;
use lapwatch_core::{DurationValue, UnitRegistry};
use lapwatch_domain::{Operator, Quantity, UnitDefinition, UnitError};

use support::mock_store;

/// Verifies the documented registration scenario.
#[test]
fn test_register_custom_unit() {
    let mut units = UnitRegistry::new();
    units.add("custom", "*", 500.0).unwrap();

    assert!(units.supported_units().iter().any(|unit| unit == "custom"));
    assert_eq!(units.custom_units(), ["custom"]);
    assert_eq!(units.definition("custom"), Some(UnitDefinition::new(Operator::Multiply, 500.0)));
    assert_eq!(units.definition("s"), None);
}

/// Verifies each registration rejection.
#[test]
fn test_registration_rejections() {
    let mut units = UnitRegistry::new();

    let builtin = units.add("ms", "*", 2.0);
    assert!(matches!(builtin, Err(UnitError::InvalidUnitName { .. })));

    let operator = units.add("pow", "^", 2.0).unwrap_err();
    assert!(operator.is_unsupported_logic());

    assert_error_contains!(units.add("void", "/", 0.0), "Division by zero");
    assert!(units.custom_units().is_empty());
}

/// Verifies chained conversions pivot through seconds.
#[test]
fn test_conversion_chain() {
    let units = Arc::new(UnitRegistry::new());
    let one = DurationValue::new(Arc::clone(&units), 1.0, "s");

    let ms = one.convert("ms").unwrap();
    assert_eq!(ms.as_f64(), Some(1000.0));
    assert_eq!(ms.convert("us").unwrap().as_f64(), Some(1_000_000.0));

    let back = ms.convert("s").unwrap();
    assert_approx_eq(back.as_f64().unwrap(), 1.0, 1e-12);

    let minute = DurationValue::new(units, 1.0, "s").convert("m").unwrap();
    assert_approx_eq(minute.as_f64().unwrap(), 1.0 / 60.0, 1e-15);
    assert_approx_eq(minute.convert("ms").unwrap().as_f64().unwrap(), 1000.0, 1e-9);
}

/// Verifies additive custom units round-trip.
#[test]
fn test_additive_custom_unit() {
    let mut units = UnitRegistry::new();
    units.add("offset", "+", 10.0).unwrap();
    units.add("shrunk", "-", 1.0).unwrap();
    let units = Arc::new(units);

    let value = DurationValue::new(Arc::clone(&units), 5.0, "s");
    let offset = value.convert("offset").unwrap();
    assert_eq!(offset.as_f64(), Some(15.0));
    assert_eq!(offset.convert("shrunk").unwrap().as_f64(), Some(4.0));
}

/// Verifies formatted values keep their label but cannot be converted.
#[test]
fn test_formatted_value_is_terminal() {
    let units = Arc::new(UnitRegistry::new());
    let value = DurationValue::new(units, 42.0, "ms");

    let formatted = value.format("took %s%s, 100%%");
    assert_eq!(formatted.get(), Some(&Quantity::Text("took 42ms, 100%".into())));
    assert_eq!(formatted.unit(), "ms");
    assert_eq!(formatted.to_string(), "took 42ms, 100%");
    assert!(matches!(formatted.convert("s"), Err(UnitError::NotNumeric { .. })));

    assert_eq!(value.to_string(), "42 ms");
}

/// Verifies absent values convert without arithmetic.
#[test]
fn test_absent_value_carries_through() {
    let units = Arc::new(UnitRegistry::new());
    let absent = DurationValue::absent(units, "s");

    let converted = absent.convert("ns").unwrap();
    assert!(converted.get().is_none());
    assert_eq!(converted.unit(), "ns");
    assert!(matches!(absent.convert("nope"), Err(UnitError::UnknownUnit { .. })));
}

/// Verifies timers report through units registered on the store.
#[test]
fn test_store_registered_unit_in_calculation() {
    let (mut store, clock) = mock_store();
    store.register_unit("frames", "*", 60.0).unwrap();

    store.start("render");
    clock.advance(Duration::from_millis(500));
    store.stop("render").unwrap();

    let frames = store.calculate("render").unwrap().unwrap().convert("frames").unwrap();
    assert_approx_eq(frames.as_f64().unwrap(), 30.0, 1e-9);
}
