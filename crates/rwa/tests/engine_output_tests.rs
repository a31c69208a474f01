//! Tests for the result container and its Display rendering.
#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use rwa::internals::engine::output::WeightsResult;

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_result() -> WeightsResult<f64> {
    WeightsResult {
        predictors: vec!["cyl".into(), "disp".into(), "hp".into()],
        raw_weights: vec![0.30, 0.25, 0.15],
        rescaled_weights: vec![42.857143, 35.714286, 21.428571],
        r_squared: 0.70,
        n_observations: 32,
    }
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test length helpers.
#[test]
fn test_len_and_is_empty() {
    let result = sample_result();
    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
}

/// Test name-based lookup.
#[test]
fn test_weight_for() {
    let result = sample_result();

    let (raw, rescaled) = result.weight_for("disp").expect("disp present");
    assert_relative_eq!(raw, 0.25, epsilon = 1e-15);
    assert_relative_eq!(rescaled, 35.714286, epsilon = 1e-6);

    assert_eq!(result.weight_for("wt"), None);
}

/// Test row iteration order and pairing.
#[test]
fn test_iter_rows() {
    let result = sample_result();
    let rows: Vec<(&str, f64, f64)> = result.iter().collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].0, "cyl");
    assert_eq!(rows[2].0, "hp");
    assert_relative_eq!(rows[1].1, 0.25, epsilon = 1e-15);
    assert_relative_eq!(rows[1].2, 35.714286, epsilon = 1e-6);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary block.
#[test]
fn test_display_summary() {
    let rendered = format!("{}", sample_result());

    assert!(rendered.contains("Observations: 32"));
    assert!(rendered.contains("Predictors:   3"));
    assert!(rendered.contains("R^2:          0.700000"));
}

/// Test the weight table header and rows.
#[test]
fn test_display_table() {
    let rendered = format!("{}", sample_result());

    assert!(rendered.contains("relative weights"));
    assert!(rendered.contains("rescaled relative weights"));
    for name in ["cyl", "disp", "hp"] {
        assert!(rendered.contains(name), "missing row for {name}");
    }
    assert!(rendered.contains("0.300000"));
    assert!(rendered.contains("42.857143"));
}

/// Test rendering with a long predictor name.
///
/// The name column widens to fit; rows stay aligned.
#[test]
fn test_display_long_name() {
    let result = WeightsResult::<f64> {
        predictors: vec!["a_rather_long_predictor_name".into(), "x".into()],
        raw_weights: vec![0.4, 0.1],
        rescaled_weights: vec![80.0, 20.0],
        r_squared: 0.5,
        n_observations: 10,
    };
    let rendered = format!("{}", result);

    assert!(rendered.contains("a_rather_long_predictor_name"));
    let header_line = rendered
        .lines()
        .find(|line| line.contains("relative weights"))
        .expect("header present");
    let first_row = rendered
        .lines()
        .find(|line| line.contains("a_rather_long_predictor_name"))
        .expect("row present");
    assert_eq!(header_line.len(), first_row.len());
}
