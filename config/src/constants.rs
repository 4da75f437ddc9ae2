//! # Configuration Constants
//!
//! Centralized constants for the obj2ply pipeline. The geometric conversion
//! parameters, precision values, and file-format conventions are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Conversion**: The fixed scale/rotate/subdivide parameters
//! - **Formats**: File extensions accepted and produced by the pipeline
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon below which a triangle is considered degenerate.
///
/// Used by mesh validation to reject zero-area faces produced by numerical
/// noise in upstream tooling.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// CONVERSION CONSTANTS (the fixed Spot3D contract)
// =============================================================================

/// Uniform scale factor converting meter-scaled geometry to millimeters.
///
/// Applied identically on all three axes.
///
/// # Example
///
/// ```rust
/// use config::constants::MM_PER_METER;
///
/// let edge_in_meters = 1.0;
/// assert_eq!(edge_in_meters * MM_PER_METER, 1000.0);
/// ```
pub const MM_PER_METER: f64 = 1000.0;

/// Rotation applied to reorient the mesh into the viewer's coordinate
/// convention, in degrees.
///
/// The axis is fixed by convention (see [`ROTATION_AXIS`]); only the angle is
/// recorded here.
pub const ROTATION_ANGLE_DEGREES: f64 = 90.0;

/// The fixed rotation axis of the reorientation step.
///
/// The upstream tool rotated about X; the axis is part of the contract and
/// not user-selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// See [`Axis`].
pub const ROTATION_AXIS: Axis = Axis::X;

/// Number of Catmull-Clark subdivision passes applied by the pipeline.
///
/// # Example
///
/// ```rust
/// use config::constants::SUBDIVISION_ITERATIONS;
///
/// assert_eq!(SUBDIVISION_ITERATIONS, 2);
/// ```
pub const SUBDIVISION_ITERATIONS: u32 = 2;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// File extension accepted for input meshes (lowercase, without dot).
pub const INPUT_EXTENSION: &str = "obj";

/// File extension produced for output meshes (lowercase, without dot).
pub const OUTPUT_EXTENSION: &str = "ply";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion: two Catmull-Clark passes
/// roughly multiply the face count by sixteen, so runaway inputs are caught
/// before subdivision rather than after.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of faces in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
pub const MAX_FACES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
