//! # IO Errors
//!
//! Error types for the file-format boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing mesh files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the input file could not be parsed
    #[error("Parse error at {}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A face references a vertex, UV, or normal that was never declared
    #[error("Index out of range at {}:{line}: {message}", path.display())]
    IndexOutOfRange {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A referenced material or texture file is missing or unreadable
    #[error("Cannot load texture {}: {source}", path.display())]
    Texture {
        path: PathBuf,
        source: mesh_core::MeshError,
    },

    /// The parsed file contains no usable geometry
    #[error("{} contains no faces", path.display())]
    NoGeometry { path: PathBuf },

    /// A face has more vertices than the PLY list count type can hold
    #[error("Face {face} has {len} vertices; the PLY list count is a uchar (max 255)")]
    FaceTooLarge { face: usize, len: usize },

    /// The mesh handed to the writer is inconsistent
    #[error("Refusing to write inconsistent mesh: {0}")]
    InvalidMesh(#[from] mesh_core::MeshError),
}

impl IoError {
    /// Creates a parse error for a specific line.
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates an index-out-of-range error for a specific line.
    pub fn index(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::IndexOutOfRange {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
