//! # Mesh Errors
//!
//! Error types for mesh construction and transform operations.

use thiserror::Error;

/// Errors that can occur while building or transforming a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face references a vertex index outside the vertex collection
    #[error("Face {face} references vertex {index}, but the mesh has only {vertex_count} vertices")]
    InvalidFaceIndex {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A face has fewer than three vertices
    #[error("Face {face} has {len} vertices (expected at least 3)")]
    FaceTooSmall { face: usize, len: usize },

    /// A face repeats a vertex index
    #[error("Face {face} repeats a vertex index")]
    DegenerateFace { face: usize },

    /// A per-vertex attribute vector does not match the vertex count
    #[error("Attribute '{attribute}' has {actual} entries for {expected} vertices")]
    AttributeLength {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An edge is shared by more than two faces
    #[error("Edge ({v0}, {v1}) is shared by {faces} faces; the surface is not two-manifold")]
    NonManifoldEdge { v0: u32, v1: u32, faces: usize },

    /// The mesh has no UV coordinates but the operation requires them
    #[error("The mesh has no UV coordinates")]
    MissingUvs,

    /// The mesh has no bound texture but the operation requires one
    #[error("The mesh has no bound texture")]
    MissingTexture,

    /// The operation requires a non-empty mesh
    #[error("The mesh is empty")]
    EmptyMesh,

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many faces
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces { count: usize, max: usize },

    /// Texture decoding failed
    #[error("Texture error: {0}")]
    Texture(#[from] image::ImageError),
}
