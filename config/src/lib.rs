//! # Config Crate
//!
//! Centralized configuration constants for the culling hull pipeline.
//! All tolerances, vertex floors and default budgets are defined here so the
//! hull builder, the decimator and the orchestrator agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HULL_EPSILON, MIN_DECIMATED_VERTICES};
//!
//! // Signed distances at or below HULL_EPSILON count as "on the plane"
//! let distance: f64 = 5e-9;
//! assert!(distance <= HULL_EPSILON);
//!
//! // Decimation never goes below the vertex floor
//! assert_eq!(MIN_DECIMATED_VERTICES, 8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **One Tolerance**: Planarity, distance and degeneracy tests share `HULL_EPSILON`
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
