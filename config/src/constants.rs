//! # Configuration Constants
//!
//! Centralized constants for the culling hull pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Minimum point counts and vertex floors
//! - **Defaults**: Default decimation budgets

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for every geometric predicate of the hull pipeline.
///
/// Applied consistently to plane distances, normal magnitudes and
/// coplanarity/collinearity checks. A point whose signed distance to a face
/// is at most this value is considered on or behind the face.
///
/// # Example
///
/// ```rust
/// use config::constants::HULL_EPSILON;
///
/// fn is_outside(signed_distance: f64) -> bool {
///     signed_distance > HULL_EPSILON
/// }
///
/// assert!(!is_outside(1e-9));
/// assert!(is_outside(1e-3));
/// ```
pub const HULL_EPSILON: f64 = 1e-8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of input points needed to seed a tetrahedron.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_HULL_POINTS;
///
/// let points = [[0, 0, 0], [1, 0, 0], [0, 1, 0]];
/// assert!(points.len() < MIN_HULL_POINTS);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Hard floor on the vertex count of a decimated hull.
///
/// Decimation never removes a vertex once the hull is down to this many
/// vertices, and hulls already at or below it are returned untouched.
pub const MIN_DECIMATED_VERTICES: usize = 8;

/// Maximum number of containment repair passes after a single vertex removal.
///
/// If original points still escape the hull after this many passes the
/// removal is rolled back.
pub const MAX_REPAIR_PASSES: usize = 16;

// =============================================================================
// DEFAULT BUDGETS
// =============================================================================

/// Default target vertex budget (renderer vertex buffer size).
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BUFFER_SIZE, MIN_DECIMATED_VERTICES};
///
/// assert!(DEFAULT_BUFFER_SIZE >= MIN_DECIMATED_VERTICES);
/// ```
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Default maximum geometric error accepted for a single vertex removal,
/// in input coordinate units.
pub const DEFAULT_MAX_GEOMETRIC_ERROR: f64 = 10.0;
