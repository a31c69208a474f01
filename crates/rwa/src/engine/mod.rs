//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the analysis: input validation, the pipeline from
//! resolved roles to assembled weights, and the result container.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Pipeline orchestration.
pub mod executor;

/// Result container.
pub mod output;
