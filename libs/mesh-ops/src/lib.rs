//! # Mesh Ops
//!
//! The transform steps of the obj2ply pipeline, one module per operation.
//!
//! ## Architecture
//!
//! ```text
//! mesh-io (load) → mesh-ops (scale → rotate → center → subdivide →
//!                            colorize → triangulate) → mesh-io (save)
//! ```
//!
//! Every operation takes the single owned [`mesh_core::Mesh`] by mutable
//! reference and either completes fully or fails with a
//! [`mesh_core::MeshError`]; no operation reads or writes external state.

pub mod colorize;
pub mod subdivide;
pub mod transform;
pub mod triangulate;

pub use colorize::bake_texture;
pub use subdivide::{catmull_clark, catmull_clark_iterations};
pub use transform::{center, rotate_degrees, scale, CenterMode};
pub use triangulate::triangulate;
