//! Output types and result structures for relative weights analysis.
//!
//! ## Purpose
//!
//! This module defines the [`WeightsResult`] struct which encapsulates the
//! outputs of an analysis: per-predictor raw and rescaled weights, the total
//! explained variance, and the observation count.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for a human-readable weights table
//!   with the two named weight columns.
//! * **Order**: Rows follow the resolved predictor order; all vectors are
//!   indexed consistently.
//!
//! ## Invariants
//!
//! * `predictors`, `raw_weights`, and `rescaled_weights` have equal length.
//! * Raw weights sum to `r_squared`; rescaled weights sum to 100, both up to
//!   floating-point error.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Relative weights output, one row per predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightsResult<T> {
    /// Predictor names, in resolved order.
    pub predictors: Vec<String>,

    /// Raw relative weights; sum equals `r_squared`.
    pub raw_weights: Vec<T>,

    /// Rescaled relative weights as percentages; sum equals 100.
    pub rescaled_weights: Vec<T>,

    /// Total explained variance of the regression.
    pub r_squared: T,

    /// Number of observations the weights were computed from.
    pub n_observations: usize,
}

impl<T: Float> WeightsResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of predictors.
    pub fn len(&self) -> usize {
        self.predictors.len()
    }

    /// Whether the result contains no predictors.
    pub fn is_empty(&self) -> bool {
        self.predictors.is_empty()
    }

    /// Raw and rescaled weight for a predictor, by name.
    pub fn weight_for(&self, name: &str) -> Option<(T, T)> {
        self.predictors
            .iter()
            .position(|predictor| predictor == name)
            .map(|idx| (self.raw_weights[idx], self.rescaled_weights[idx]))
    }

    /// Iterate `(name, raw, rescaled)` rows in predictor order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T, T)> + '_ {
        self.predictors
            .iter()
            .zip(self.raw_weights.iter())
            .zip(self.rescaled_weights.iter())
            .map(|((name, &raw), &rescaled)| (name.as_str(), raw, rescaled))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for WeightsResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.n_observations)?;
        writeln!(f, "  Predictors:   {}", self.len())?;
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        writeln!(f)?;

        // Column widths: predictor names vary, weight columns are fixed.
        let name_width = self
            .predictors
            .iter()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
            .max("Predictor".len());

        writeln!(
            f,
            "{:<name_width$} {:>18} {:>27}",
            "Predictor", "relative weights", "rescaled relative weights"
        )?;
        writeln!(f, "{:-<width$}", "", width = name_width + 47)?;

        for (name, raw, rescaled) in self.iter() {
            writeln!(
                f,
                "{:<name_width$} {:>18.6} {:>27.6}",
                name, raw, rescaled
            )?;
        }

        Ok(())
    }
}
