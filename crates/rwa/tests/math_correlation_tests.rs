//! Tests for Pearson correlation and correlation-matrix assembly.
#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use rwa::internals::math::correlation::{correlation_matrix, pearson};

// ============================================================================
// Pearson Coefficient Tests
// ============================================================================

/// Test perfect positive and negative linear relations.
#[test]
fn test_pearson_perfect_correlation() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let scaled: Vec<f64> = a.iter().map(|v| 2.0 * v + 7.0).collect();
    let negated: Vec<f64> = a.iter().map(|v| -0.5 * v + 3.0).collect();

    assert_relative_eq!(pearson(&a, &scaled), 1.0, epsilon = 1e-12);
    assert_relative_eq!(pearson(&a, &negated), -1.0, epsilon = 1e-12);
}

/// Test a column correlated with itself.
#[test]
fn test_pearson_self_correlation() {
    let a = [0.3, -1.2, 2.4, 0.9, -0.1];
    assert_relative_eq!(pearson(&a, &a), 1.0, epsilon = 1e-12);
}

/// Test exactly uncorrelated columns.
#[test]
fn test_pearson_orthogonal_columns() {
    let a = [1.0, 1.0, -1.0, -1.0];
    let b = [1.0, -1.0, 1.0, -1.0];
    assert_relative_eq!(pearson(&a, &b), 0.0, epsilon = 1e-12);
}

/// Test a hand-computed intermediate value.
#[test]
fn test_pearson_known_value() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [2.0, 1.0, 4.0, 3.0];
    // cov = 4, sd_a * sd_b = 5
    assert_relative_eq!(pearson(&a, &b), 0.8, epsilon = 1e-12);
}

/// Test symmetry of the coefficient.
#[test]
fn test_pearson_symmetry() {
    let a = [0.4, 1.9, -2.3, 0.0, 1.1, -0.7];
    let b = [1.2, -0.5, 0.8, 2.2, -1.4, 0.3];
    assert_relative_eq!(pearson(&a, &b), pearson(&b, &a), epsilon = 1e-15);
}

/// Test invariance under affine transformation of either column.
#[test]
fn test_pearson_affine_invariance() {
    let a = [0.4, 1.9, -2.3, 0.0, 1.1, -0.7];
    let b = [1.2, -0.5, 0.8, 2.2, -1.4, 0.3];
    let shifted: Vec<f64> = a.iter().map(|v| 3.0 * v - 11.0).collect();

    assert_relative_eq!(pearson(&a, &b), pearson(&shifted[..], &b), epsilon = 1e-12);
}

/// Test the zero-variance guard.
///
/// Constant columns never reach this function through the engine, but the
/// function itself stays total.
#[test]
fn test_pearson_constant_column_returns_zero() {
    let a = [2.0, 2.0, 2.0];
    let b = [1.0, 2.0, 3.0];
    assert_eq!(pearson(&a, &b), 0.0);
}

// ============================================================================
// Matrix Assembly Tests
// ============================================================================

/// Test matrix shape, unit diagonal, and symmetry.
#[test]
fn test_matrix_structure() {
    let a: [f64; 5] = [0.4, 1.9, -2.3, 0.0, 1.1];
    let b = [1.2, -0.5, 0.8, 2.2, -1.4];
    let c = [0.0, 1.0, 4.0, 9.0, 16.0];
    let matrix = correlation_matrix(&[&a, &b, &c]);

    assert_eq!(matrix.nrows(), 3);
    assert_eq!(matrix.ncols(), 3);
    for i in 0..3 {
        assert_relative_eq!(matrix[(i, i)], 1.0, epsilon = 1e-12);
        for j in 0..3 {
            assert_relative_eq!(matrix[(i, j)], matrix[(j, i)], epsilon = 1e-15);
            assert!(matrix[(i, j)].abs() <= 1.0 + 1e-12);
        }
    }
}

/// Test that matrix entries match pairwise calls.
#[test]
fn test_matrix_entries_match_pairwise() {
    let a = [0.4, 1.9, -2.3, 0.0, 1.1];
    let b = [1.2, -0.5, 0.8, 2.2, -1.4];
    let matrix = correlation_matrix(&[&a, &b]);
    assert_relative_eq!(matrix[(0, 1)], pearson(&a, &b), epsilon = 1e-15);
}

/// Test the single-column matrix.
#[test]
fn test_matrix_single_column() {
    let a = [1.0, 2.0, 3.0];
    let matrix = correlation_matrix::<f64>(&[&a]);
    assert_eq!(matrix.nrows(), 1);
    assert_eq!(matrix[(0, 0)], 1.0);
}

/// Test f32 assembly.
#[test]
fn test_matrix_f32() {
    let a: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
    let b: [f32; 4] = [2.0, 1.0, 4.0, 3.0];
    let matrix = correlation_matrix(&[&a, &b]);
    assert_relative_eq!(matrix[(0, 1)], 0.8f32, epsilon = 1e-6);
}
