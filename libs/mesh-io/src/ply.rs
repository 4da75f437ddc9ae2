//! # Stanford PLY Writer
//!
//! Serializes a mesh with an explicit, auditable set of save flags. The
//! element layout is fixed:
//! - `element vertex`: `x y z` always, `nx ny nz` when normals are saved,
//!   `red green blue alpha` (uchar) when colors are saved
//! - `element face`: `property list uchar int vertex_indices`
//!
//! No face colors, wedge colors, or wedge texture coordinates are ever
//! written; the downstream viewer consumes per-vertex data only.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_core::Mesh;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IoError;

/// PLY encoding variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlyFormat {
    /// ASCII text format (human-readable)
    #[default]
    Ascii,
    /// Binary little-endian format
    BinaryLittleEndian,
}

impl PlyFormat {
    fn header_name(self) -> &'static str {
        match self {
            PlyFormat::Ascii => "ascii",
            PlyFormat::BinaryLittleEndian => "binary_little_endian",
        }
    }
}

/// Which optional vertex attributes the writer emits.
///
/// An attribute is written only when its flag is set *and* the mesh carries
/// it; everything not listed here is always omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlySaveOptions {
    /// Write per-vertex RGBA colors (uchar)
    pub vertex_color: bool,
    /// Write per-vertex normals (float)
    pub vertex_normal: bool,
}

impl Default for PlySaveOptions {
    fn default() -> Self {
        Self {
            vertex_color: true,
            vertex_normal: true,
        }
    }
}

/// Writes the mesh to a PLY file.
///
/// Faces with more than 255 vertices are rejected up front; the list count
/// in the face element is a uchar.
pub fn write_ply(
    mesh: &Mesh,
    path: impl AsRef<Path>,
    format: PlyFormat,
    options: PlySaveOptions,
) -> Result<(), IoError> {
    mesh.validate()?;
    for (i, face) in mesh.faces().iter().enumerate() {
        if face.len() > u8::MAX as usize {
            return Err(IoError::FaceTooLarge {
                face: i,
                len: face.len(),
            });
        }
    }

    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let colors = if options.vertex_color {
        mesh.colors()
    } else {
        None
    };
    let normals = if options.vertex_normal {
        mesh.normals()
    } else {
        None
    };

    // Header (always ASCII).
    writeln!(writer, "ply")?;
    writeln!(writer, "format {} 1.0", format.header_name())?;
    writeln!(writer, "comment obj2ply export")?;
    writeln!(writer, "element vertex {}", mesh.vertex_count())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    if normals.is_some() {
        writeln!(writer, "property float nx")?;
        writeln!(writer, "property float ny")?;
        writeln!(writer, "property float nz")?;
    }
    if colors.is_some() {
        writeln!(writer, "property uchar red")?;
        writeln!(writer, "property uchar green")?;
        writeln!(writer, "property uchar blue")?;
        writeln!(writer, "property uchar alpha")?;
    }
    writeln!(writer, "element face {}", mesh.face_count())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    match format {
        PlyFormat::Ascii => write_ascii_body(&mut writer, mesh, normals, colors)?,
        PlyFormat::BinaryLittleEndian => write_binary_body(&mut writer, mesh, normals, colors)?,
    }

    writer.flush()?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "wrote PLY"
    );
    Ok(())
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn write_ascii_body(
    writer: &mut impl Write,
    mesh: &Mesh,
    normals: Option<&[glam::DVec3]>,
    colors: Option<&[[f32; 4]]>,
) -> Result<(), IoError> {
    for i in 0..mesh.vertex_count() {
        let v = mesh.vertex(i as u32);
        write!(writer, "{} {} {}", v.x as f32, v.y as f32, v.z as f32)?;
        if let Some(normals) = normals {
            let n = normals[i];
            write!(writer, " {} {} {}", n.x as f32, n.y as f32, n.z as f32)?;
        }
        if let Some(colors) = colors {
            let [r, g, b, a] = colors[i];
            write!(
                writer,
                " {} {} {} {}",
                quantize(r),
                quantize(g),
                quantize(b),
                quantize(a)
            )?;
        }
        writeln!(writer)?;
    }

    for face in mesh.faces() {
        write!(writer, "{}", face.len())?;
        for &index in face {
            write!(writer, " {index}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn write_binary_body(
    writer: &mut impl Write,
    mesh: &Mesh,
    normals: Option<&[glam::DVec3]>,
    colors: Option<&[[f32; 4]]>,
) -> Result<(), IoError> {
    for i in 0..mesh.vertex_count() {
        let v = mesh.vertex(i as u32);
        for c in [v.x as f32, v.y as f32, v.z as f32] {
            writer.write_all(&c.to_le_bytes())?;
        }
        if let Some(normals) = normals {
            let n = normals[i];
            for c in [n.x as f32, n.y as f32, n.z as f32] {
                writer.write_all(&c.to_le_bytes())?;
            }
        }
        if let Some(colors) = colors {
            writer.write_all(&colors[i].map(quantize))?;
        }
    }

    for face in mesh.faces() {
        writer.write_all(&[face.len() as u8])?;
        for &index in face {
            writer.write_all(&(index as i32).to_le_bytes())?;
        }
    }
    Ok(())
}
