//! # Mesh Core
//!
//! Core mesh data model for the obj2ply pipeline.
//!
//! ## Architecture
//!
//! ```text
//! mesh-io (load/save) → mesh-core (Mesh) ← mesh-ops (transform steps)
//! ```
//!
//! The [`Mesh`] is the one domain entity of the pipeline: an ordered vertex
//! collection with optional per-vertex attributes (normals, colors, UVs), an
//! ordered collection of polygonal faces indexing into it, and an optional
//! bound [`Texture`]. Transform steps mutate a single owned `Mesh` in place
//! or rebuild it wholesale; the face-index invariant is re-checkable at any
//! stage via [`Mesh::validate`].

pub mod error;
pub mod mesh;
pub mod texture;

pub use error::MeshError;
pub use mesh::Mesh;
pub use texture::Texture;
