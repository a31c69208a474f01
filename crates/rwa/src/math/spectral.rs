//! Symmetric eigen-decomposition and matrix square roots.
//!
//! ## Purpose
//!
//! This module wraps the dense symmetric eigen-solver and derives the
//! symmetric square root `Lambda = V·Λ^(1/2)·Vᵀ` of a correlation matrix,
//! together with its inverse.
//!
//! ## Design notes
//!
//! * **Basis independence**: Eigenvectors are unique only up to sign and, for
//!   repeated eigenvalues, rotation within the eigenspace. `Lambda` is always
//!   reconstructed as `V·Λ^(1/2)·Vᵀ`, which is invariant to those choices;
//!   no canonical eigenvector ordering is assumed anywhere.
//! * **Tolerances**: Eigenvalue classification is relative to the spectrum's
//!   largest magnitude, floored at one. Eigenvalues inside the negative noise
//!   band are clamped to zero before the square root; eigenvalues below the
//!   band are a degeneracy error.
//! * **Bounds**: This module is bounded on `RealField` only, so scalar calls
//!   (`sqrt`, `abs`, `max`) resolve without colliding with `num_traits::Float`.
//!
//! ## Invariants
//!
//! * `Lambda` is symmetric and `Lambda·Lambda` reproduces the input matrix
//!   up to floating-point error.
//!
//! ## Non-goals
//!
//! * This module does not build correlation matrices or interpret weights.

// External dependencies
use nalgebra::{DMatrix, DVector, RealField, SymmetricEigen};
use num_traits::{ToPrimitive, Zero};

// Internal dependencies
use crate::primitives::errors::RwaError;

// ============================================================================
// Tolerances
// ============================================================================

/// Relative band below zero treated as floating-point noise and clamped.
/// Anything more negative is a genuine PSD violation.
const PSD_RTOL: f64 = 1e-8;

/// Relative threshold below which a clamped eigenvalue marks the transform
/// singular (perfect collinearity).
const SINGULAR_RTOL: f64 = 1e-12;

// ============================================================================
// Spectral Decomposition
// ============================================================================

/// Eigenvalues and eigenvectors of a symmetric matrix.
#[derive(Debug, Clone)]
pub struct SpectralDecomposition<T: RealField> {
    /// Eigenvalues, in the solver's order.
    pub eigenvalues: DVector<T>,

    /// Eigenvectors as matrix columns, matching `eigenvalues` by index.
    pub eigenvectors: DMatrix<T>,
}

/// Eigen-decompose a symmetric matrix.
pub fn decompose<T: RealField + Copy>(matrix: &DMatrix<T>) -> SpectralDecomposition<T> {
    let eigen = SymmetricEigen::new(matrix.clone());
    SpectralDecomposition {
        eigenvalues: eigen.eigenvalues,
        eigenvectors: eigen.eigenvectors,
    }
}

// ============================================================================
// Symmetric Square Root
// ============================================================================

/// Reconstruct `Lambda = V·Λ^(1/2)·Vᵀ` from a decomposition.
///
/// Eigenvalues in the noise band `[-tol, 0)` are clamped to zero. Fails with
/// [`RwaError::NotPositiveSemiDefinite`] for eigenvalues below the band and
/// with [`RwaError::SingularTransform`] when a clamped eigenvalue is zero
/// within tolerance, since the square root could not be inverted.
pub fn symmetric_sqrt<T: RealField + ToPrimitive + Copy>(
    decomposition: &SpectralDecomposition<T>,
) -> Result<DMatrix<T>, RwaError> {
    let one: T = nalgebra::convert(1.0);

    // Scale tolerances by the spectrum's largest magnitude, floored at 1.
    let mut scale = one;
    for ev in decomposition.eigenvalues.iter() {
        scale = scale.max(ev.abs());
    }
    let psd_tol = scale * nalgebra::convert(PSD_RTOL);
    let singular_tol = scale * nalgebra::convert(SINGULAR_RTOL);

    let mut clamped = decomposition.eigenvalues.clone();
    for ev in clamped.iter_mut() {
        if *ev < -psd_tol {
            return Err(RwaError::NotPositiveSemiDefinite {
                eigenvalue: ev.to_f64().unwrap_or(f64::NAN),
            });
        }
        if *ev < T::zero() {
            *ev = T::zero();
        }
        if *ev < singular_tol {
            return Err(RwaError::SingularTransform);
        }
    }

    // Lambda = V·Λ^(1/2)·Vᵀ, scaling each eigenvector column by sqrt(λ).
    let mut scaled = decomposition.eigenvectors.clone();
    for (j, ev) in clamped.iter().enumerate() {
        scaled.column_mut(j).scale_mut(ev.sqrt());
    }

    Ok(&scaled * decomposition.eigenvectors.transpose())
}

/// Invert a transform matrix via LU.
///
/// Fails with [`RwaError::SingularTransform`] when no inverse exists.
pub fn invert<T: RealField + Copy>(matrix: &DMatrix<T>) -> Result<DMatrix<T>, RwaError> {
    matrix
        .clone()
        .try_inverse()
        .ok_or(RwaError::SingularTransform)
}
