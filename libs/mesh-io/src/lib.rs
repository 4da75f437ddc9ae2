//! # Mesh IO
//!
//! The file-format boundary of the obj2ply pipeline: a Wavefront OBJ reader
//! on the way in, a Stanford PLY writer on the way out.
//!
//! ## Architecture
//!
//! ```text
//! .obj (+ .mtl + texture) → mesh-core::Mesh → .ply
//! ```

pub mod error;
pub mod obj;
pub mod ply;

pub use error::IoError;
pub use obj::read_obj;
pub use ply::{write_ply, PlyFormat, PlySaveOptions};
