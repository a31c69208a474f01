//! Execution engine for relative weights analysis.
//!
//! ## Purpose
//!
//! This module provides the executor that orchestrates the full pipeline:
//! role resolution, validation, correlation, orthogonalization, partial
//! effects, and weight assembly. It is the central component coordinating
//! the lower layers to produce a [`WeightsResult`].
//!
//! ## Design notes
//!
//! * **Stateless**: The executor holds no state; `run` is a pure function of
//!   its inputs, safely callable concurrently on independent tables.
//! * **Pipeline order**: role resolution → validation → correlation matrix →
//!   eigen-decomposition → lambda matrix → partial effects → weights.
//! * **Generics**: Generic over `Float + RealField` scalars (f32/f64). All
//!   colliding scalar calls live in the single-bound math modules.
//!
//! ## Invariants
//!
//! * The correlation matrix is built over [outcome, predictors] in that
//!   column order, so index 0 always refers to the outcome.
//! * Output row order equals the resolved predictor order.
//! * No partial result is ever returned; every error aborts the pipeline.
//!
//! ## Non-goals
//!
//! * This module does not define the numeric kernels (math/algorithms layers).
//! * This module does not provide public-facing builder ergonomics.

// External dependencies
use nalgebra::{DVector, RealField};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::roles::VariableRoles;
use crate::algorithms::weights;
use crate::engine::output::WeightsResult;
use crate::engine::validator::Validator;
use crate::math::correlation::correlation_matrix;
use crate::math::spectral;
use crate::primitives::errors::RwaError;
use crate::primitives::table::ObservationTable;

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for the relative weights pipeline.
pub struct WeightsExecutor;

impl WeightsExecutor {
    /// Run the full pipeline for `roles` against `table`.
    pub fn run<T>(
        table: &ObservationTable<T>,
        roles: &VariableRoles,
    ) -> Result<WeightsResult<T>, RwaError>
    where
        T: Float + RealField,
    {
        // Resolve roles and validate the table and every referenced column.
        let resolved = roles.resolve(table.column_names())?;
        Validator::validate_table(table)?;

        let mut columns: Vec<&[T]> = Vec::with_capacity(resolved.predictors.len() + 1);
        for name in core::iter::once(&resolved.outcome).chain(resolved.predictors.iter()) {
            let values = table
                .column(name)
                .ok_or_else(|| RwaError::UnknownColumn(name.clone()))?;
            Validator::validate_column_data(name, values)?;
            columns.push(values);
        }

        // Correlation structure over [outcome, predictors].
        let correlations = correlation_matrix(&columns);
        let k = resolved.predictors.len();
        let y_corr = DVector::from_fn(k, |i, _| correlations[(i + 1, 0)]);
        let x_corr = correlations.view((1, 1), (k, k)).into_owned();

        // Orthogonal transform: Lambda is the symmetric square root of the
        // predictor correlation sub-matrix.
        let decomposition = spectral::decompose(&x_corr);
        let lambda = spectral::symmetric_sqrt(&decomposition)?;
        let lambda_inv = spectral::invert(&lambda)?;

        // Partial effects and weights.
        let partial = weights::partial_effects(&lambda_inv, &y_corr);
        let r_squared = weights::explained_variance(&partial);
        let raw = weights::raw_weights(&lambda, &partial);
        let rescaled = weights::rescale(&raw, r_squared);

        Ok(WeightsResult {
            predictors: resolved.predictors,
            raw_weights: raw.iter().copied().collect(),
            rescaled_weights: rescaled.iter().copied().collect(),
            r_squared,
            n_observations: table.n_rows(),
        })
    }
}
