//! # Config Crate
//!
//! Centralized configuration constants for the obj2ply conversion pipeline.
//! All fixed pipeline parameters and tunable values are defined here to keep
//! the conversion contract auditable in one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MM_PER_METER, SUBDIVISION_ITERATIONS, EPSILON};
//!
//! // Meter-scaled input coordinates become millimeters
//! let meters = 0.5;
//! assert_eq!(meters * MM_PER_METER, 500.0);
//!
//! // The pipeline always subdivides the same number of times
//! assert_eq!(SUBDIVISION_ITERATIONS, 2);
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Fixed Contract**: The conversion parameters mirror the published
//!   Spot3D pipeline and are not user-configurable
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
