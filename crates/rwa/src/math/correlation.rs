//! Pearson correlation on column slices.
//!
//! ## Purpose
//!
//! This module computes pairwise Pearson correlation coefficients and
//! assembles the full symmetric correlation matrix over a set of columns.
//!
//! ## Design notes
//!
//! * **Two-pass**: Means are computed first, then centered products, which is
//!   numerically better behaved than the single-pass expansion.
//! * **Generics**: Column arithmetic is generic over `Float` types; the
//!   matrix container is an [`nalgebra`] `DMatrix` so the result feeds the
//!   spectral layer directly.
//!
//! ## Invariants
//!
//! * The assembled matrix is symmetric with unit diagonal.
//! * Off-diagonal entries lie in [-1, 1] for non-constant columns.
//!
//! ## Non-goals
//!
//! * This module does not reject constant columns; the engine validator
//!   guarantees positive variance before correlation is computed.

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// ============================================================================
// Pearson Correlation
// ============================================================================

/// Pearson correlation coefficient between two equal-length columns.
///
/// Returns zero when either column has zero variance; callers reject
/// constant columns before reaching this point.
pub fn pearson<T: Float>(a: &[T], b: &[T]) -> T {
    let n_t = T::from(a.len()).unwrap_or(T::one());

    // Pass 1: means
    let mean_a = a.iter().copied().fold(T::zero(), |acc, v| acc + v) / n_t;
    let mean_b = b.iter().copied().fold(T::zero(), |acc, v| acc + v) / n_t;

    // Pass 2: centered products
    let (cross, var_a, var_b) = a.iter().zip(b.iter()).fold(
        (T::zero(), T::zero(), T::zero()),
        |(cross, var_a, var_b), (&ai, &bi)| {
            let da = ai - mean_a;
            let db = bi - mean_b;
            (cross + da * db, var_a + da * da, var_b + db * db)
        },
    );

    let denom = var_a.sqrt() * var_b.sqrt();
    if denom == T::zero() {
        T::zero()
    } else {
        cross / denom
    }
}

/// Assemble the full Pearson correlation matrix over `columns`.
///
/// Entry `(i, j)` is the correlation of `columns[i]` with `columns[j]`;
/// row/column order follows the input order.
pub fn correlation_matrix<T: Float + Scalar>(columns: &[&[T]]) -> DMatrix<T> {
    let k = columns.len();
    let mut matrix = DMatrix::identity(k, k);

    for i in 0..k {
        for j in (i + 1)..k {
            let r = pearson(columns[i], columns[j]);
            matrix[(i, j)] = r;
            matrix[(j, i)] = r;
        }
    }

    matrix
}
