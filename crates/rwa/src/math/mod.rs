//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the analysis:
//! - Pearson correlation and correlation-matrix assembly
//! - Spectral (eigen) decomposition of symmetric matrices
//!
//! These are reusable building blocks with no role- or table-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pearson correlation.
pub mod correlation;

/// Symmetric eigen-decomposition and matrix square roots.
pub mod spectral;
