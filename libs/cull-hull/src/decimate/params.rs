//! Parameters for hull decimation.

use config::constants::{DEFAULT_BUFFER_SIZE, DEFAULT_MAX_GEOMETRIC_ERROR, MAX_REPAIR_PASSES};
use serde::{Deserialize, Serialize};

/// How the removal queue treats outdated entries for a vertex.
///
/// The queue never updates entries in place; a vertex whose cost changes is
/// pushed again and older entries stay in the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleEntryPolicy {
    /// The first popped entry of a live vertex is honoured even if a newer
    /// cost was pushed since. Cheap, but a vertex may be removed on an
    /// outdated (lower) error estimate.
    FirstLivePop,
    /// Every entry carries the vertex generation at push time; only the
    /// entry matching the current generation is honoured.
    #[default]
    Generation,
}

/// Parameters for hull decimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimateParams {
    /// Target maximum vertex count. Removal continues past `max_error` only
    /// while the hull is larger than this. Default: 32
    pub buffer_size: usize,

    /// Maximum geometric error accepted for one removal. Values `<= 0`
    /// disable decimation. Default: 10.0
    pub max_error: f64,

    /// Treatment of outdated queue entries. Default: `Generation`
    pub stale_policy: StaleEntryPolicy,

    /// Containment repair passes before a removal is rolled back.
    /// Default: 16
    pub max_repair_passes: usize,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_error: DEFAULT_MAX_GEOMETRIC_ERROR,
            stale_policy: StaleEntryPolicy::default(),
            max_repair_passes: MAX_REPAIR_PASSES,
        }
    }
}

impl DecimateParams {
    /// Create params with a buffer size and error budget.
    #[must_use]
    pub fn new(buffer_size: usize, max_error: f64) -> Self {
        Self {
            buffer_size,
            max_error,
            ..Default::default()
        }
    }

    /// Set the stale entry policy.
    #[must_use]
    pub const fn with_stale_policy(mut self, policy: StaleEntryPolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Set the containment repair pass limit.
    #[must_use]
    pub const fn with_max_repair_passes(mut self, passes: usize) -> Self {
        self.max_repair_passes = passes;
        self
    }

    /// Returns true if these params can remove anything at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.max_error > 0.0
    }
}
