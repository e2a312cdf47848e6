//! # Culling Pipeline
//!
//! Turns an object's integer points into the reduced point set the renderer
//! uploads as its culling volume.
//!
//! ```text
//! points → build → decimate → dedup → buffer check
//!            │
//!            └─ degenerate input → points unchanged
//! ```

use crate::decimate::{decimate_with_report, DecimateParams, StaleEntryPolicy};
use crate::error::{HullError, HullResult};
use crate::hull::build;
use config::constants::{DEFAULT_BUFFER_SIZE, DEFAULT_MAX_GEOMETRIC_ERROR};
use glam::IVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Settings for one culling volume reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CullParams {
    /// Renderer vertex buffer size. Default: 32
    pub buffer_size: usize,

    /// Maximum geometric error per removal, `<= 0` skips decimation.
    /// Default: 10.0
    pub max_error: f64,

    /// Treatment of outdated removal queue entries. Default: `Generation`
    pub stale_policy: StaleEntryPolicy,

    /// Fail with `BufferOverflow` when the result does not fit the buffer.
    /// Default: true
    pub enforce_buffer_size: bool,
}

impl Default for CullParams {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_error: DEFAULT_MAX_GEOMETRIC_ERROR,
            stale_policy: StaleEntryPolicy::default(),
            enforce_buffer_size: true,
        }
    }
}

impl CullParams {
    /// Create params with a buffer size and error budget.
    #[must_use]
    pub fn new(buffer_size: usize, max_error: f64) -> Self {
        Self {
            buffer_size,
            max_error,
            ..Default::default()
        }
    }

    /// Set whether an oversized result is an error.
    #[must_use]
    pub const fn with_enforce_buffer_size(mut self, enforce: bool) -> Self {
        self.enforce_buffer_size = enforce;
        self
    }

    /// Set the stale entry policy.
    #[must_use]
    pub const fn with_stale_policy(mut self, policy: StaleEntryPolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// The decimation part of these settings.
    #[must_use]
    pub fn decimate_params(&self) -> DecimateParams {
        DecimateParams::new(self.buffer_size, self.max_error).with_stale_policy(self.stale_policy)
    }
}

/// Reduces a point set to a containing hull that fits the buffer.
///
/// Degenerate input (fewer than 4 points, collinear or coplanar) is returned
/// unchanged. Otherwise the hull vertices after decimation are returned with
/// exact duplicates removed.
///
/// # Errors
///
/// `BufferOverflow` if the result is larger than `buffer_size` and
/// `enforce_buffer_size` is set.
///
/// # Example
///
/// ```rust
/// use cull_hull::{reduce_points, CullParams};
/// use glam::IVec3;
///
/// let line: Vec<IVec3> = (0..4).map(|x| IVec3::new(x, 0, 0)).collect();
/// let reduced = reduce_points(&line, &CullParams::default()).unwrap();
/// assert_eq!(reduced, line);
/// ```
pub fn reduce_points(points: &[IVec3], params: &CullParams) -> HullResult<Vec<IVec3>> {
    let reduced = match build(points) {
        Ok(hull) => decimate_with_report(&hull, points, &params.decimate_params()).points(),
        Err(err) if err.is_degenerate_input() => {
            warn!(%err, points = points.len(), "Hull failed, using raw points");
            points.to_vec()
        }
        Err(err) => return Err(err),
    };

    if params.enforce_buffer_size && reduced.len() > params.buffer_size {
        return Err(HullError::BufferOverflow {
            count: reduced.len(),
            max: params.buffer_size,
        });
    }

    info!(
        input = points.len(),
        output = reduced.len(),
        "Culling volume reduced"
    );

    Ok(reduced)
}

/// Reduces several objects independently on the rayon pool.
///
/// Results are returned in input order; one object failing does not affect
/// the others.
pub fn reduce_batch(objects: &[Vec<IVec3>], params: &CullParams) -> Vec<HullResult<Vec<IVec3>>> {
    objects
        .par_iter()
        .map(|points| reduce_points(points, params))
        .collect()
}
