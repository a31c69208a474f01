//! Error types for relative weights analysis.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during a relative
//! weights computation, including table construction, variable-role
//! resolution, data validation, and numerical degeneracy.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., column names, counts).
//! * **Deferred**: Builder-usage errors are caught and stored during
//!   configuration and reported by `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Table construction**: Empty, ragged, or duplicate-named columns.
//! 2. **Role resolution**: Outcome and predictor names that cannot be split
//!    into exactly one outcome plus a non-empty, disjoint predictor set.
//! 3. **Data validation**: Too few rows, non-finite values, constant columns.
//! 4. **Numerical degeneracy**: Non-PSD predictor correlations or a singular
//!    orthogonalizing transform.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for relative weights operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RwaError {
    /// The table contains no columns.
    EmptyTable,

    /// A column contains no observations.
    EmptyColumn(String),

    /// Column lengths disagree; the table must be rectangular.
    RaggedColumns {
        /// Name of the offending column.
        column: String,
        /// Number of rows in the offending column.
        got: usize,
        /// Number of rows established by the first column.
        expected: usize,
    },

    /// Two columns share the same name.
    DuplicateColumn(String),

    /// Number of names does not match the number of matrix columns.
    ColumnCountMismatch {
        /// Number of names provided.
        names: usize,
        /// Number of matrix columns.
        columns: usize,
    },

    /// Neither the outcome nor the predictors were specified.
    MissingRoles,

    /// A referenced variable is not a column of the table.
    UnknownColumn(String),

    /// The predictor set is empty.
    EmptyPredictors,

    /// A predictor name appears more than once.
    DuplicatePredictor(String),

    /// The outcome variable also appears among the predictors.
    OverlappingRoles(String),

    /// Outcome inference did not yield exactly one column.
    AmbiguousOutcome {
        /// Number of candidate outcome columns after removing predictors.
        candidates: usize,
    },

    /// Number of observations is below the minimum for correlation.
    TooFewRows {
        /// Number of rows provided.
        got: usize,
        /// Minimum required rows.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A referenced column has zero variance, so Pearson correlation is undefined.
    ConstantColumn(String),

    /// The predictor correlation matrix has a non-negligible negative eigenvalue.
    NotPositiveSemiDefinite {
        /// The offending eigenvalue.
        eigenvalue: f64,
    },

    /// The orthogonalizing transform is singular (perfectly collinear predictors).
    SingularTransform,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RwaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyTable => write!(f, "Table contains no columns"),
            Self::EmptyColumn(name) => write!(f, "Column '{name}' contains no observations"),
            Self::RaggedColumns {
                column,
                got,
                expected,
            } => {
                write!(
                    f,
                    "Ragged columns: '{column}' has {got} rows, expected {expected}"
                )
            }
            Self::DuplicateColumn(name) => write!(f, "Duplicate column name: '{name}'"),
            Self::ColumnCountMismatch { names, columns } => {
                write!(
                    f,
                    "Column count mismatch: {names} names for {columns} matrix columns"
                )
            }
            Self::MissingRoles => {
                write!(
                    f,
                    "No variable roles given: at least the outcome variable must be provided"
                )
            }
            Self::UnknownColumn(name) => {
                write!(f, "Variable '{name}' is not a column of the table")
            }
            Self::EmptyPredictors => write!(f, "Predictor set is empty"),
            Self::DuplicatePredictor(name) => {
                write!(f, "Predictor '{name}' appears more than once")
            }
            Self::OverlappingRoles(name) => {
                write!(
                    f,
                    "Variable '{name}' is both the outcome and a predictor"
                )
            }
            Self::AmbiguousOutcome { candidates } => {
                write!(
                    f,
                    "Could not determine a single outcome variable: {candidates} columns remain after removing predictors"
                )
            }
            Self::TooFewRows { got, min } => {
                write!(f, "Too few rows: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::ConstantColumn(name) => {
                write!(
                    f,
                    "Column '{name}' is constant; Pearson correlation is undefined"
                )
            }
            Self::NotPositiveSemiDefinite { eigenvalue } => {
                write!(
                    f,
                    "Predictor correlation matrix is not positive semi-definite (eigenvalue {eigenvalue})"
                )
            }
            Self::SingularTransform => {
                write!(
                    f,
                    "Orthogonalizing transform is singular; predictors are perfectly collinear"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for RwaError {}
