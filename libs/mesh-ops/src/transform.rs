//! # Matrix Transform Steps
//!
//! Scale, rotate, and center operations. Each builds a 4x4 affine matrix and
//! delegates to [`Mesh::transform`], keeping the pipeline driver focused on
//! sequencing.

use config::constants::Axis;
use glam::{DMat4, DVec3};
use mesh_core::Mesh;

/// How the centering step picks the reference point moved to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterMode {
    /// Mean of all vertex positions
    #[default]
    Centroid,
    /// Center of the axis-aligned bounding box
    BoundingBoxCenter,
}

/// Scales every vertex coordinate, per axis.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_core::Mesh;
/// use mesh_ops::transform::scale;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
/// scale(&mut mesh, 1000.0, 1000.0, 1000.0);
/// assert_eq!(mesh.vertex(0), DVec3::new(1000.0, 2000.0, 3000.0));
/// ```
pub fn scale(mesh: &mut Mesh, sx: f64, sy: f64, sz: f64) {
    mesh.transform(&DMat4::from_scale(DVec3::new(sx, sy, sz)));
}

/// Rotates the mesh about a fixed axis by an angle in degrees.
///
/// Normals, if present, rotate with the geometry.
pub fn rotate_degrees(mesh: &mut Mesh, axis: Axis, degrees: f64) {
    let radians = degrees.to_radians();
    let matrix = match axis {
        Axis::X => DMat4::from_rotation_x(radians),
        Axis::Y => DMat4::from_rotation_y(radians),
        Axis::Z => DMat4::from_rotation_z(radians),
    };
    mesh.transform(&matrix);
}

/// Translates the mesh so its reference point lands on the origin.
pub fn center(mesh: &mut Mesh, mode: CenterMode) {
    let reference = match mode {
        CenterMode::Centroid => mesh.centroid(),
        CenterMode::BoundingBoxCenter => {
            let (min, max) = mesh.bounding_box();
            (min + max) * 0.5
        }
    };
    mesh.translate(-reference);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(vec![0, 1, 2, 3]);
        mesh
    }

    #[test]
    fn test_scale_preserves_counts() {
        let mut mesh = unit_quad();
        scale(&mut mesh, 2.0, 3.0, 4.0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_scale_meters_to_millimeters() {
        let mut mesh = unit_quad();
        scale(&mut mesh, 1000.0, 1000.0, 1000.0);
        let (_, max) = mesh.bounding_box();
        assert_eq!(max, DVec3::new(1000.0, 1000.0, 0.0));
    }

    #[test]
    fn test_rotate_x_90_maps_y_to_z() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        rotate_degrees(&mut mesh, Axis::X, 90.0);
        let v = mesh.vertex(0);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_on_centroid() {
        let mut mesh = unit_quad();
        center(&mut mesh, CenterMode::Centroid);
        assert_relative_eq!(mesh.centroid().length(), 0.0, epsilon = 1e-12);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, -0.5);
        assert_relative_eq!(max.x, 0.5);
    }

    #[test]
    fn test_center_on_bounding_box() {
        let mut mesh = Mesh::new();
        // Lopsided point cloud: centroid and bbox center differ.
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(4.0, 0.0, 0.0));
        center(&mut mesh, CenterMode::BoundingBoxCenter);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, -2.0);
        assert_relative_eq!(max.x, 2.0);
    }

    #[test]
    fn test_fixed_sequence_composition() {
        // The pipeline contract: coordinates equal center(rotate(1000 * v)).
        let mut mesh = unit_quad();
        scale(&mut mesh, 1000.0, 1000.0, 1000.0);
        rotate_degrees(&mut mesh, Axis::X, 90.0);
        center(&mut mesh, CenterMode::Centroid);

        // Vertex 2 was (1, 1, 0): scaled to (1000, 1000, 0), rotated to
        // (1000, 0, 1000), centered to (500, 0, 500).
        let v = mesh.vertex(2);
        assert_relative_eq!(v.x, 500.0, epsilon = 1e-9);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(v.z, 500.0, epsilon = 1e-9);
    }
}
