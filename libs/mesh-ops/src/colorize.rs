//! # Texture-to-Vertex-Color Baking
//!
//! Samples the bound texture at every vertex UV and stores the result as the
//! vertex color. After baking, the mesh no longer needs its texture to be
//! displayed with color.

use mesh_core::{Mesh, MeshError};

/// Bakes the bound texture into per-vertex colors.
///
/// Fails when the mesh carries no UV coordinates or no texture. The texture
/// stays bound afterwards; the exporter simply never writes it.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use mesh_core::{Mesh, Texture};
/// use mesh_ops::colorize::bake_texture;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.set_uvs(vec![DVec2::new(0.5, 0.5)]);
/// mesh.set_texture(Texture::new(image::RgbaImage::from_pixel(
///     2, 2, image::Rgba([255, 0, 0, 255]),
/// )));
/// bake_texture(&mut mesh).unwrap();
/// assert_eq!(mesh.colors().unwrap()[0], [1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn bake_texture(mesh: &mut Mesh) -> Result<(), MeshError> {
    let uvs = mesh.uvs().ok_or(MeshError::MissingUvs)?;
    let texture = mesh.texture().ok_or(MeshError::MissingTexture)?;

    let colors: Vec<[f32; 4]> = uvs.iter().map(|&uv| texture.sample(uv)).collect();
    mesh.set_colors(colors);
    Ok(())
}
