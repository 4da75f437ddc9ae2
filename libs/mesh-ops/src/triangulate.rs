//! # Polygon Triangulation
//!
//! Fan-splits every non-triangular face. Vertex indices and attributes stay
//! untouched, so colors and UVs baked earlier remain valid.

use mesh_core::{Mesh, MeshError};

/// Converts every face with more than three vertices into a triangle fan.
///
/// Faces are assumed convex (the subdivision step only produces quads), so a
/// fan from the first vertex never self-intersects.
pub fn triangulate(mesh: &mut Mesh) -> Result<(), MeshError> {
    let mut triangles = Vec::with_capacity(
        mesh.faces()
            .iter()
            .map(|f| f.len().saturating_sub(2))
            .sum(),
    );

    for (i, face) in mesh.faces().iter().enumerate() {
        if face.len() < 3 {
            return Err(MeshError::FaceTooSmall {
                face: i,
                len: face.len(),
            });
        }
        for j in 1..face.len() - 1 {
            triangles.push(vec![face[0], face[j], face[j + 1]]);
        }
    }

    mesh.set_faces(triangles);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_triangles_pass_through() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(vec![0, 1, 2]);
        triangulate(&mut mesh).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces()[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_quad_becomes_two_triangles() {
        let mut mesh = Mesh::new();
        for v in [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y] {
            mesh.add_vertex(v);
        }
        mesh.add_face(vec![0, 1, 2, 3]);
        triangulate(&mut mesh).unwrap();
        assert!(mesh.is_triangulated());
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces()[0], vec![0, 1, 2]);
        assert_eq!(mesh.faces()[1], vec![0, 2, 3]);
    }

    #[test]
    fn test_pentagon_becomes_three_triangles() {
        let mut mesh = Mesh::new();
        for i in 0..5 {
            let angle = i as f64 * std::f64::consts::TAU / 5.0;
            mesh.add_vertex(DVec3::new(angle.cos(), angle.sin(), 0.0));
        }
        mesh.add_face(vec![0, 1, 2, 3, 4]);
        triangulate(&mut mesh).unwrap();
        assert_eq!(mesh.face_count(), 3);
        assert!(mesh.is_triangulated());
        mesh.validate().unwrap();
    }

    #[test]
    fn test_too_small_face_rejected() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_face(vec![0, 1]);
        assert!(matches!(
            triangulate(&mut mesh),
            Err(MeshError::FaceTooSmall { .. })
        ));
    }

    #[test]
    fn test_attributes_untouched() {
        let mut mesh = Mesh::new();
        for v in [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y] {
            mesh.add_vertex(v);
        }
        mesh.add_face(vec![0, 1, 2, 3]);
        mesh.set_colors(vec![[1.0, 0.0, 0.0, 1.0]; 4]);
        triangulate(&mut mesh).unwrap();
        assert_eq!(mesh.colors().unwrap().len(), 4);
    }
}
