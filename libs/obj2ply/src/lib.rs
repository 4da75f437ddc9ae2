//! # obj2ply
//!
//! Converts a meter-scaled, UV-textured Wavefront OBJ mesh into a
//! millimeter-scaled, vertex-colorized ASCII PLY mesh for the Spot3D viewer.
//!
//! The conversion is a fixed sequence over a single owned mesh:
//!
//! ```text
//! load → scale ×1000 → rotate 90° → center → subdivide ×2 →
//! colorize → triangulate → export
//! ```
//!
//! Every parameter of the sequence lives in the `config` crate; the driver in
//! [`pipeline`] only sequences library calls and the CLI in [`cli`]/[`paths`]
//! only validates the filesystem contract around them.

pub mod cli;
pub mod error;
pub mod paths;
pub mod pipeline;

pub use error::Error;
pub use pipeline::{convert, PipelineConfig};
