//! # RWA — Johnson's Relative Weights for Rust
//!
//! Apportion a multiple linear regression's explained variance (R²) among
//! its predictors, even when the predictors are correlated.
//!
//! ## What are relative weights?
//!
//! When predictors are correlated, standardized coefficients and simple
//! correlations cannot cleanly attribute R² to individual variables.
//! Johnson's Relative Weights transform the predictors onto an orthogonal
//! basis via an eigen-decomposition of their correlation matrix, project the
//! outcome correlations onto that basis, and fold the explained variance
//! back onto the original predictors. The result is one non-negative weight
//! per predictor: the raw weights sum to the regression's R², and the
//! rescaled weights express the same shares as percentages summing to 100.
//!
//! ## Quick Start
//!
//! ```rust
//! use rwa::prelude::*;
//!
//! let mpg = vec![22.8, 21.5, 21.4, 18.1, 15.5, 14.3];
//! let cyl = vec![4.0, 4.0, 6.0, 6.0, 8.0, 8.0];
//! let disp = vec![108.0, 120.1, 258.0, 225.0, 318.0, 360.0];
//!
//! let table = ObservationTable::from_columns([
//!     ("mpg", mpg),
//!     ("cyl", cyl),
//!     ("disp", disp),
//! ])?;
//!
//! // Declare the outcome; the predictors are inferred as all other columns.
//! let engine = RelativeWeights::new().outcome("mpg").build()?;
//! let result = engine.compute(&table)?;
//!
//! println!("{}", result);
//! # Result::<(), RwaError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Observations: 6
//!   Predictors:   2
//!   R^2:          0.872633
//!
//! Predictor   relative weights   rescaled relative weights
//! --------------------------------------------------------
//! cyl                 0.473815                   54.297113
//! disp                0.398819                   45.702887
//! ```
//!
//! ## Explicit roles
//!
//! Either role may be given explicitly; when both are given, the output rows
//! follow the predictor order as declared:
//!
//! ```rust
//! use rwa::prelude::*;
//! # let mpg = vec![22.8, 21.5, 21.4, 18.1, 15.5, 14.3];
//! # let cyl = vec![4.0, 4.0, 6.0, 6.0, 8.0, 8.0];
//! # let disp = vec![108.0, 120.1, 258.0, 225.0, 318.0, 360.0];
//! # let table = ObservationTable::from_columns([
//! #     ("mpg", mpg), ("cyl", cyl), ("disp", disp),
//! # ])?;
//!
//! let result = RelativeWeights::new()
//!     .outcome("mpg")
//!     .predictors(["disp", "cyl"])
//!     .build()?
//!     .compute(&table)?;
//!
//! assert_eq!(result.predictors, vec!["disp", "cyl"]);
//! let raw_sum: f64 = result.raw_weights.iter().sum();
//! assert!((raw_sum - result.r_squared).abs() < 1e-12);
//! # Result::<(), RwaError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `compute` returns a `Result<WeightsResult<T>, RwaError>`.
//!
//! - **`Ok(WeightsResult<T>)`**: Per-predictor raw and rescaled weights,
//!   plus the total R² and the observation count.
//! - **`Err(RwaError)`**: A typed failure — unresolvable variable roles,
//!   invalid data (NaN, constant columns), or numerical degeneracy
//!   (non-PSD correlations, perfectly collinear predictors). No partial
//!   result is ever returned.
//!
//! ```rust
//! use rwa::prelude::*;
//! # let x1 = vec![1.0, 2.0, 3.0, 4.0];
//! # let y = vec![1.0, 3.0, 2.0, 4.0];
//! # let table = ObservationTable::from_columns([("x1", x1), ("y", y)])?;
//!
//! match RelativeWeights::new().outcome("y").build()?.compute(&table) {
//!     Ok(result) => println!("x1 share: {:.1}%", result.rescaled_weights[0]),
//!     Err(e) => eprintln!("analysis failed: {}", e),
//! }
//! # Result::<(), RwaError>::Ok(())
//! ```
//!
//! ## References
//!
//! - Johnson, J. W. (2000). "A Heuristic Method for Estimating the Relative
//!   Weight of Predictor Variables in Multiple Regression"
//! - Tonidandel, S. & LeBreton, J. M. (2011). "Relative Importance Analysis:
//!   A Useful Supplement to Regression Analysis"

// Layer 1: Primitives - errors and table storage.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - role resolution and weight arithmetic.
mod algorithms;

// Layer 4: Engine - validation and pipeline orchestration.
mod engine;

// High-level fluent API for relative weights analysis.
mod api;

// Standard relative weights prelude.
pub mod prelude {
    pub use crate::api::{
        ObservationTable, RelativeWeightsBuilder as RelativeWeights, RelativeWeightsEngine,
        RwaError, VariableRoles, WeightsResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
