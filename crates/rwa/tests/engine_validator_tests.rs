//! Tests for input validation.
#![cfg(feature = "dev")]

use rwa::internals::engine::validator::Validator;
use rwa::internals::primitives::errors::RwaError;
use rwa::internals::primitives::table::ObservationTable;

// ============================================================================
// Table Shape Tests
// ============================================================================

/// Test that a well-formed table passes.
#[test]
fn test_valid_table_passes() {
    let table =
        ObservationTable::from_columns([("x", vec![1.0, 2.0, 3.0])]).expect("valid table");
    assert!(Validator::validate_table(&table).is_ok());
}

/// Test the minimum-rows boundary.
///
/// Two rows is the smallest table with defined variance; one row fails.
#[test]
fn test_minimum_rows_boundary() {
    let two_rows =
        ObservationTable::from_columns([("x", vec![1.0, 2.0])]).expect("valid table");
    assert!(Validator::validate_table(&two_rows).is_ok());

    let one_row = ObservationTable::from_columns([("x", vec![1.0])]).expect("valid table");
    assert!(matches!(
        Validator::validate_table(&one_row),
        Err(RwaError::TooFewRows { got: 1, min: 2 })
    ));
}

// ============================================================================
// Column Data Tests
// ============================================================================

/// Test that finite, varying data passes.
#[test]
fn test_valid_column_passes() {
    assert!(Validator::validate_column_data("x", &[1.0, -2.5, 0.0, 3.75]).is_ok());
}

/// Test NaN rejection with positional context.
#[test]
fn test_nan_rejected_with_context() {
    let res = Validator::validate_column_data("hp", &[1.0, 2.0, f64::NAN]);
    match res {
        Err(RwaError::InvalidNumericValue(context)) => {
            assert!(context.contains("hp[2]"), "context was: {context}");
        }
        other => panic!("Expected InvalidNumericValue, got {other:?}"),
    }
}

/// Test infinity rejection, both signs.
#[test]
fn test_infinity_rejected() {
    assert!(matches!(
        Validator::validate_column_data("x", &[f64::INFINITY, 1.0]),
        Err(RwaError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        Validator::validate_column_data("x", &[1.0, f64::NEG_INFINITY]),
        Err(RwaError::InvalidNumericValue(_))
    ));
}

/// Test constant-column rejection.
#[test]
fn test_constant_column_rejected() {
    let res = Validator::validate_column_data("gear", &[3.0, 3.0, 3.0, 3.0]);
    assert!(matches!(res, Err(RwaError::ConstantColumn(name)) if name == "gear"));
}

/// Test that a column varying in one entry passes the variance check.
#[test]
fn test_nearly_constant_column_passes() {
    assert!(Validator::validate_column_data("x", &[3.0, 3.0, 3.0, 3.1]).is_ok());
}

/// Test the finite check runs before the variance check.
///
/// An all-NaN column is reported as invalid data, not as constant.
#[test]
fn test_finite_check_precedes_variance_check() {
    let res = Validator::validate_column_data("x", &[f64::NAN, f64::NAN]);
    assert!(matches!(res, Err(RwaError::InvalidNumericValue(_))));
}

/// Test the f32 path.
#[test]
fn test_f32_columns() {
    assert!(Validator::validate_column_data("x", &[1.0f32, 2.0, 3.0]).is_ok());
    assert!(matches!(
        Validator::validate_column_data("x", &[1.0f32, f32::NAN]),
        Err(RwaError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Builder Usage Tests
// ============================================================================

/// Test duplicate-parameter reporting.
#[test]
fn test_duplicate_parameter_check() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert!(matches!(
        Validator::validate_no_duplicates(Some("outcome")),
        Err(RwaError::DuplicateParameter {
            parameter: "outcome"
        })
    ));
}
