//! # Cull Hull
//!
//! Containing hulls for integer point clouds.
//! Builds the exact convex hull of an object's points and simplifies it to
//! fit a renderer vertex buffer without letting any point escape.
//!
//! ## Architecture
//!
//! ```text
//! integer points → hull::build (QuickHull) → decimate → reduced points
//! ```
//!
//! ## Algorithms
//!
//! - **Hull**: incremental QuickHull with outside sets and horizon stitching
//! - **Decimation**: greedy vertex removal with fan re-triangulation
//! - **Containment repair**: faces pushed outward over escaped points
//!
//! ## Usage
//!
//! ```rust
//! use cull_hull::{reduce_points, CullParams};
//! use glam::IVec3;
//!
//! let mut points: Vec<IVec3> = (0..8)
//!     .map(|i| IVec3::new(i & 1, (i >> 1) & 1, (i >> 2) & 1) * 100)
//!     .collect();
//! points.push(IVec3::splat(50));
//!
//! let reduced = reduce_points(&points, &CullParams::default()).unwrap();
//! assert_eq!(reduced.len(), 8);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod decimate;
pub mod error;
pub mod hull;
pub mod pipeline;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use decimate::{decimate, decimate_with_report, DecimateParams, DecimationResult, StaleEntryPolicy};
pub use error::{HullError, HullResult};
pub use hull::{build, Hull, Plane};
pub use pipeline::{reduce_batch, reduce_points, CullParams};
