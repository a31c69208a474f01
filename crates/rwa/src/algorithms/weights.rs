//! Partial effects and weight arithmetic.
//!
//! ## Purpose
//!
//! This module holds the numeric heart of the analysis: projecting the
//! outcome correlations onto the orthogonalized predictor basis and
//! contracting the squared transform against the squared partial effects.
//!
//! ## Design notes
//!
//! * **Pure**: Plain functions over `nalgebra` vectors and matrices; no
//!   validation, no labels, no state.
//! * **Bounds**: Bounded on `RealField` only, like the spectral module, so
//!   scalar arithmetic resolves unambiguously.
//!
//! ## Invariants
//!
//! * Raw weights are non-negative (each term is a product of squares) and
//!   sum to the explained variance.
//! * Rescaled weights sum to 100 up to floating-point error.
//!
//! ## Non-goals
//!
//! * This module does not build or invert the transform matrix.

// External dependencies
use nalgebra::{DMatrix, DVector, RealField};
use num_traits::Zero;

// ============================================================================
// Partial Effects
// ============================================================================

/// Partial effects `p = Lambda⁻¹·y_corr`: the outcome correlations expressed
/// in the orthogonalized predictor basis.
pub fn partial_effects<T: RealField + Copy>(
    lambda_inv: &DMatrix<T>,
    y_corr: &DVector<T>,
) -> DVector<T> {
    lambda_inv * y_corr
}

/// Total explained variance `R² = Σ p_i²`.
pub fn explained_variance<T: RealField + Copy>(partial_effects: &DVector<T>) -> T {
    partial_effects
        .iter()
        .fold(T::zero(), |acc, &p| acc + p * p)
}

// ============================================================================
// Weights
// ============================================================================

/// Raw relative weights `w_i = Σ_j Lambda_{j,i}²·p_j²`.
///
/// Implemented as the matrix product of the element-wise-squared transform
/// (transposed) with the element-wise-squared partial effects.
pub fn raw_weights<T: RealField + Copy>(
    lambda: &DMatrix<T>,
    partial_effects: &DVector<T>,
) -> DVector<T> {
    let lambda_squared = lambda.component_mul(lambda);
    let partial_squared = partial_effects.component_mul(partial_effects);
    lambda_squared.transpose() * partial_squared
}

/// Rescale raw weights to percentages of the explained variance.
pub fn rescale<T: RealField + Copy>(raw_weights: &DVector<T>, r_squared: T) -> DVector<T> {
    let hundred: T = nalgebra::convert(100.0);
    raw_weights * (hundred / r_squared)
}
