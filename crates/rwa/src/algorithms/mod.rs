//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the analysis-specific rules built on the math layer:
//! - Variable-role resolution (outcome vs. predictors, with inference)
//! - The relative-weight computation itself
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Outcome/predictor role resolution.
pub mod roles;

/// Partial effects and weight arithmetic.
pub mod weights;
