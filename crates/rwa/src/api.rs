//! High-level API for relative weights analysis.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for declaring variable roles and an engine whose `compute`
//! method runs the pipeline against an observation table.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; either role may be omitted and is
//!   inferred from the table at compute time.
//! * **Validated**: Table-independent role consistency is checked during
//!   `build()`; table-dependent resolution happens inside `compute`.
//! * **Type-Safe**: `compute` is generic over `Float + RealField` scalars.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RelativeWeightsBuilder`] via `RelativeWeights::new()`.
//! 2. Declare roles (`.outcome()`, `.predictors()`) — at least one.
//! 3. Call `.build()` to obtain a [`RelativeWeightsEngine`].
//! 4. Call `.compute(&table)` for each table of interest.

// Internal dependencies
use crate::engine::executor::WeightsExecutor;
use crate::engine::validator::Validator;

// External dependencies
use nalgebra::RealField;
use num_traits::Float;

// Publicly re-exported types
pub use crate::algorithms::roles::VariableRoles;
pub use crate::engine::output::WeightsResult;
pub use crate::primitives::errors::RwaError;
pub use crate::primitives::table::ObservationTable;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for declaring variable roles.
#[derive(Debug, Clone, Default)]
pub struct RelativeWeightsBuilder {
    /// Outcome variable name.
    pub outcome: Option<String>,

    /// Predictor variable names, in output order.
    pub predictors: Option<Vec<String>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RelativeWeightsBuilder {
    /// Create a new builder with no roles declared.
    pub fn new() -> Self {
        Self {
            outcome: None,
            predictors: None,
            duplicate_param: None,
        }
    }

    /// Set the outcome variable name.
    pub fn outcome(mut self, name: impl Into<String>) -> Self {
        if self.outcome.is_some() {
            self.duplicate_param = Some("outcome");
        }
        self.outcome = Some(name.into());
        self
    }

    /// Set the predictor variable names, in the desired output order.
    pub fn predictors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.predictors.is_some() {
            self.duplicate_param = Some("predictors");
        }
        self.predictors = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the declared roles and construct the engine.
    ///
    /// Checks everything that is independent of any table: at least one role
    /// given; predictors, if given, non-empty, distinct, and not containing
    /// the outcome. Table-dependent resolution happens in
    /// [`RelativeWeightsEngine::compute`].
    pub fn build(self) -> Result<RelativeWeightsEngine, RwaError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if self.outcome.is_none() && self.predictors.is_none() {
            return Err(RwaError::MissingRoles);
        }

        if let Some(predictors) = &self.predictors {
            if predictors.is_empty() {
                return Err(RwaError::EmptyPredictors);
            }
            for (i, name) in predictors.iter().enumerate() {
                if predictors[..i].contains(name) {
                    return Err(RwaError::DuplicatePredictor(name.clone()));
                }
            }
            if let Some(outcome) = &self.outcome {
                if predictors.contains(outcome) {
                    return Err(RwaError::OverlappingRoles(outcome.clone()));
                }
            }
        }

        Ok(RelativeWeightsEngine {
            roles: VariableRoles::new(self.outcome, self.predictors),
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Configured relative weights engine.
///
/// Holds only the declared roles; each `compute` call is a pure function of
/// the table it receives, so one engine may serve many tables and threads.
#[derive(Debug, Clone)]
pub struct RelativeWeightsEngine {
    /// Declared variable roles, resolved per table.
    roles: VariableRoles,
}

impl RelativeWeightsEngine {
    /// Compute relative weights for `table`.
    ///
    /// Resolves omitted roles against the table's columns, then runs the
    /// pipeline: correlation matrix, eigen-decomposition, orthogonal
    /// transform, partial effects, raw and rescaled weights.
    pub fn compute<T>(&self, table: &ObservationTable<T>) -> Result<WeightsResult<T>, RwaError>
    where
        T: Float + RealField,
    {
        WeightsExecutor::run(table, &self.roles)
    }

    /// The declared roles, before table resolution.
    pub fn roles(&self) -> &VariableRoles {
        &self.roles
    }
}
