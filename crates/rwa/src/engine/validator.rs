//! Input validation for the relative weights pipeline.
//!
//! ## Purpose
//!
//! This module provides validation for the observation table and the columns
//! referenced by the resolved roles, run before any numeric work.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape checks**: Non-empty table, enough rows for correlation.
//! * **Finite checks**: No NaN/Inf in any referenced column.
//! * **Variance checks**: Constant columns make Pearson correlation
//!   undefined and are rejected up front rather than left to poison the
//!   decomposition as NaN.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not resolve variable roles (handled by `roles`).
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the weight computation itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RwaError;
use crate::primitives::table::ObservationTable;

// ============================================================================
// Validator
// ============================================================================

/// Minimum observations for a Pearson correlation (variance needs two).
const MIN_ROWS: usize = 2;

/// Validation utility for tables and referenced columns.
///
/// Provides static methods returning `Result<(), RwaError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Table Shape
    // ========================================================================

    /// Validate the overall table shape.
    pub fn validate_table<T: Float>(table: &ObservationTable<T>) -> Result<(), RwaError> {
        // Check 1: Non-empty table
        if table.n_cols() == 0 || table.n_rows() == 0 {
            return Err(RwaError::EmptyTable);
        }

        // Check 2: Enough rows for correlation
        if table.n_rows() < MIN_ROWS {
            return Err(RwaError::TooFewRows {
                got: table.n_rows(),
                min: MIN_ROWS,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Column Data
    // ========================================================================

    /// Validate the data of a referenced column.
    pub fn validate_column_data<T: Float>(name: &str, values: &[T]) -> Result<(), RwaError> {
        // Check 3: All values finite
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(RwaError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 4: Positive variance
        let first = values[0];
        if values.iter().all(|&value| value == first) {
            return Err(RwaError::ConstantColumn(name.to_string()));
        }

        Ok(())
    }

    // ========================================================================
    // Builder Usage
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RwaError> {
        if let Some(parameter) = duplicate_param {
            return Err(RwaError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
