//! # Mesh Data Structure
//!
//! Polygonal mesh representation with vertices, faces, and optional
//! per-vertex attributes.

use config::constants::{DEGENERATE_AREA_EPSILON, MAX_FACES, MAX_VERTICES};
use glam::{DMat4, DVec2, DVec3};

use crate::error::MeshError;
use crate::texture::Texture;

/// A polygonal mesh with vertices, faces, and optional per-vertex attributes.
///
/// All geometry calculations use f64 internally. Narrowing to f32 only
/// happens at the file-format boundary. Faces are index loops of arbitrary
/// length (≥ 3); the triangulate step reduces them to triangles before
/// export.
///
/// # Example
///
/// ```rust
/// use mesh_core::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(vec![0, 1, 2]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Faces as loops of vertex indices, counter-clockwise
    faces: Vec<Vec<u32>>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
    /// Optional vertex colors (RGBA in [0.0, 1.0])
    colors: Option<Vec<[f32; 4]>>,
    /// Optional vertex UV coordinates
    uvs: Option<Vec<DVec2>>,
    /// Optional texture bound through the UVs
    texture: Option<Texture>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if every face is a triangle.
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(|f| f.len() == 3)
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face by vertex indices.
    pub fn add_face(&mut self, indices: Vec<u32>) {
        self.faces.push(indices);
    }

    /// Replaces the face list, leaving vertices and attributes untouched.
    pub fn set_faces(&mut self, faces: Vec<Vec<u32>>) {
        self.faces = faces;
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Sets vertex normals.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = Some(normals);
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Drops vertex normals (e.g. after an operation that invalidates them).
    pub fn clear_normals(&mut self) {
        self.normals = None;
    }

    /// Sets vertex colors.
    pub fn set_colors(&mut self, colors: Vec<[f32; 4]>) {
        self.colors = Some(colors);
    }

    /// Returns the vertex colors.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Drops vertex colors.
    pub fn clear_colors(&mut self) {
        self.colors = None;
    }

    /// Sets vertex UV coordinates.
    pub fn set_uvs(&mut self, uvs: Vec<DVec2>) {
        self.uvs = Some(uvs);
    }

    /// Returns the vertex UV coordinates.
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Binds a texture to the mesh.
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    /// Returns the bound texture.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Removes and returns the bound texture.
    pub fn take_texture(&mut self) -> Option<Texture> {
        self.texture.take()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Computes the centroid (mean of all vertex positions).
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Normals, if present, are transformed by the inverse transpose and
    /// renormalized.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize();
            }
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Computes area-weighted vertex normals from the face loops.
    ///
    /// Face normals are computed with Newell's method, which stays stable for
    /// non-planar polygons, then accumulated onto each face vertex and
    /// normalized.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for face in &self.faces {
            let n = newell_normal(&self.vertices, face);
            for &idx in face {
                normals[idx as usize] += n;
            }
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - Every face has at least three distinct vertices
    /// - Attribute vectors match the vertex count
    /// - Size limits are respected
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertices.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: self.vertices.len(),
                max: MAX_VERTICES,
            });
        }
        if self.faces.len() > MAX_FACES {
            return Err(MeshError::TooManyFaces {
                count: self.faces.len(),
                max: MAX_FACES,
            });
        }

        let vertex_count = self.vertices.len();
        for (i, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::FaceTooSmall {
                    face: i,
                    len: face.len(),
                });
            }
            for &idx in face {
                if idx as usize >= vertex_count {
                    return Err(MeshError::InvalidFaceIndex {
                        face: i,
                        index: idx,
                        vertex_count,
                    });
                }
            }
            for (a, &va) in face.iter().enumerate() {
                if face[a + 1..].contains(&va) {
                    return Err(MeshError::DegenerateFace { face: i });
                }
            }
        }

        for (name, len) in [
            ("normals", self.normals.as_ref().map(Vec::len)),
            ("uvs", self.uvs.as_ref().map(Vec::len)),
            ("colors", self.colors.as_ref().map(Vec::len)),
        ] {
            if let Some(len) = len {
                if len != vertex_count {
                    return Err(MeshError::AttributeLength {
                        attribute: name,
                        expected: vertex_count,
                        actual: len,
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns the total surface area of the triangulated faces.
    ///
    /// Faces with more than three vertices are fanned for the measurement.
    /// Useful for detecting meshes collapsed to zero extent.
    pub fn surface_area(&self) -> f64 {
        let mut area = 0.0;
        for face in &self.faces {
            if face.len() < 3 {
                continue;
            }
            for i in 1..face.len() - 1 {
                let v0 = self.vertices[face[0] as usize];
                let v1 = self.vertices[face[i] as usize];
                let v2 = self.vertices[face[i + 1] as usize];
                area += 0.5 * (v1 - v0).cross(v2 - v0).length();
            }
        }
        area
    }

    /// Returns true if any fanned triangle has a measurable area.
    pub fn has_area(&self) -> bool {
        self.surface_area() > DEGENERATE_AREA_EPSILON
    }
}

/// Newell's method face normal (unnormalized length is twice the area for
/// planar polygons).
fn newell_normal(vertices: &[DVec3], face: &[u32]) -> DVec3 {
    let mut n = DVec3::ZERO;
    for i in 0..face.len() {
        let a = vertices[face[i] as usize];
        let b = vertices[face[(i + 1) % face.len()] as usize];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(vec![0, 1, 2, 3]);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_is_triangulated() {
        let mut mesh = quad();
        assert!(!mesh.is_triangulated());
        mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(vec![0, 1, 2]);
        assert!(mesh.is_triangulated());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_centroid() {
        let mesh = quad();
        assert_relative_eq!(mesh.centroid().x, 0.5);
        assert_relative_eq!(mesh.centroid().y, 0.5);
        assert_relative_eq!(mesh.centroid().z, 0.0);
    }

    #[test]
    fn test_mesh_transform_scales_positions() {
        let mut mesh = quad();
        mesh.transform(&DMat4::from_scale(DVec3::splat(1000.0)));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1000.0, 1000.0, 0.0));
    }

    #[test]
    fn test_mesh_transform_rotates_normals() {
        let mut mesh = quad();
        mesh.compute_normals();
        mesh.transform(&DMat4::from_rotation_x(std::f64::consts::FRAC_PI_2));
        let n = mesh.normals().unwrap()[0];
        // +Z normal rotates onto -Y under a 90 degree X rotation
        assert_relative_eq!(n.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(n.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_compute_normals_quad() {
        let mut mesh = quad();
        mesh.compute_normals();
        for n in mesh.normals().unwrap() {
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(quad().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(vec![0, 1, 2]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::InvalidFaceIndex { .. })
        ));
    }

    #[test]
    fn test_mesh_validate_degenerate_face() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(vec![0, 1, 1]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::DegenerateFace { .. })
        ));
    }

    #[test]
    fn test_mesh_validate_attribute_length() {
        let mut mesh = quad();
        mesh.set_uvs(vec![DVec2::ZERO]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::AttributeLength { .. })
        ));
    }

    #[test]
    fn test_mesh_surface_area() {
        let mesh = quad();
        assert_relative_eq!(mesh.surface_area(), 1.0);
        assert!(mesh.has_area());
    }
}
