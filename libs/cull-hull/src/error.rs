//! # Hull Errors
//!
//! Error types for hull construction, validation and the culling pipeline.
//!
//! ## Error Policy
//!
//! - Only fatal construction failures and the final buffer check surface here
//! - Local geometric edge cases (zero-area faces, non-manifold rings) are
//!   skipped where they occur and never reach the caller

use thiserror::Error;

/// Errors that can occur while building, checking or reducing a hull.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// Fewer input points than a tetrahedron needs
    #[error("Insufficient points: {count} (need at least {required})")]
    InsufficientPoints {
        /// Number of points supplied
        count: usize,
        /// Minimum number of points needed
        required: usize,
    },

    /// All points collinear or coplanar
    #[error("Degenerate input: {message}")]
    Degenerate {
        /// What made the input degenerate
        message: String,
    },

    /// Reduced point set still larger than the renderer buffer
    #[error("Buffer overflow: {count} vertices (max: {max})")]
    BufferOverflow {
        /// Vertex count after reduction
        count: usize,
        /// Buffer size the renderer accepts
        max: usize,
    },

    /// Hull failed a containment, convexity or manifold check
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Which check failed and where
        message: String,
    },
}

impl HullError {
    /// Creates a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// Returns true for construction failures the caller should answer by
    /// falling back to the raw point set.
    pub fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            Self::InsufficientPoints { .. } | Self::Degenerate { .. }
        )
    }
}

/// Result type for hull operations.
pub type HullResult<T> = Result<T, HullError>;
