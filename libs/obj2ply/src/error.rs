//! # Top-Level Errors
//!
//! Every failure surfaces here, is printed once, and terminates the run with
//! exit status 1. There are no retries and no partial results.

use std::path::PathBuf;

use thiserror::Error;

/// Errors terminating a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist
    #[error("The file {} does not exist", .0.display())]
    InputMissing(PathBuf),

    /// The input file is not an OBJ file
    #[error("The file {} is not a .obj file", .0.display())]
    InputNotObj(PathBuf),

    /// The output file is not a PLY file
    #[error("The output file {} is not a .ply file", .0.display())]
    OutputNotPly(PathBuf),

    /// The output exists and overwriting was not requested
    #[error("The output file {} already exists! If you want to overwrite it add the --force flag to the command", .0.display())]
    OutputExists(PathBuf),

    /// Filesystem failure (e.g. creating the output directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the OBJ or writing the PLY failed
    #[error(transparent)]
    Format(#[from] mesh_io::IoError),

    /// A mesh-processing step failed
    #[error(transparent)]
    Mesh(#[from] mesh_core::MeshError),
}
