//! Variable-role resolution.
//!
//! ## Purpose
//!
//! This module resolves the caller's (possibly partial) outcome/predictor
//! specification against a table's column names. Exactly one of the two
//! roles may be omitted and is inferred as the complementary column set.
//!
//! ## Design notes
//!
//! * **Strict**: Overlap between outcome and predictors, duplicate predictor
//!   names, and ambiguous outcome inference are all hard errors; nothing is
//!   silently picked.
//! * **Deterministic order**: Explicitly given predictors keep the caller's
//!   order; inferred predictors keep the table's column order. The output
//!   weight table follows the resolved predictor order.
//!
//! ## Invariants
//!
//! * A [`ResolvedRoles`] value names exactly one outcome plus a non-empty,
//!   duplicate-free predictor set disjoint from the outcome, and every name
//!   is a column of the table it was resolved against.
//!
//! ## Non-goals
//!
//! * This module does not inspect column data, only names.

// Internal dependencies
use crate::primitives::errors::RwaError;

// ============================================================================
// Variable Roles
// ============================================================================

/// The caller's outcome/predictor specification, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableRoles {
    /// Outcome variable name, if given.
    pub outcome: Option<String>,

    /// Predictor variable names in caller order, if given.
    pub predictors: Option<Vec<String>>,
}

/// A fully resolved variable split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoles {
    /// The single outcome variable.
    pub outcome: String,

    /// Predictors in output order.
    pub predictors: Vec<String>,
}

impl VariableRoles {
    /// Create roles from optional outcome and predictor names.
    pub fn new(outcome: Option<String>, predictors: Option<Vec<String>>) -> Self {
        Self {
            outcome,
            predictors,
        }
    }

    /// Resolve against a table's column names.
    ///
    /// Infers whichever role was omitted as the complement of the other, in
    /// table column order. Fails when both roles are omitted, when any named
    /// variable is missing from the table, when the split overlaps or
    /// duplicates names, or when outcome inference does not yield exactly
    /// one column.
    pub fn resolve(&self, column_names: &[String]) -> Result<ResolvedRoles, RwaError> {
        if let Some(predictors) = &self.predictors {
            if predictors.is_empty() {
                return Err(RwaError::EmptyPredictors);
            }
            for (i, name) in predictors.iter().enumerate() {
                if predictors[..i].contains(name) {
                    return Err(RwaError::DuplicatePredictor(name.clone()));
                }
                if !column_names.contains(name) {
                    return Err(RwaError::UnknownColumn(name.clone()));
                }
            }
        }

        if let Some(outcome) = &self.outcome {
            if !column_names.contains(outcome) {
                return Err(RwaError::UnknownColumn(outcome.clone()));
            }
            if let Some(predictors) = &self.predictors {
                if predictors.contains(outcome) {
                    return Err(RwaError::OverlappingRoles(outcome.clone()));
                }
            }
        }

        let outcome = match (&self.outcome, &self.predictors) {
            (Some(outcome), _) => outcome.clone(),
            (None, Some(predictors)) => {
                // Infer the outcome as the sole column left over.
                let candidates: Vec<&String> = column_names
                    .iter()
                    .filter(|name| !predictors.contains(name))
                    .collect();
                match candidates.as_slice() {
                    [single] => (*single).clone(),
                    _ => {
                        return Err(RwaError::AmbiguousOutcome {
                            candidates: candidates.len(),
                        });
                    }
                }
            }
            (None, None) => return Err(RwaError::MissingRoles),
        };

        let predictors = match &self.predictors {
            Some(predictors) => predictors.clone(),
            None => {
                let inferred: Vec<String> = column_names
                    .iter()
                    .filter(|name| **name != outcome)
                    .cloned()
                    .collect();
                if inferred.is_empty() {
                    return Err(RwaError::EmptyPredictors);
                }
                inferred
            }
        };

        Ok(ResolvedRoles {
            outcome,
            predictors,
        })
    }
}
