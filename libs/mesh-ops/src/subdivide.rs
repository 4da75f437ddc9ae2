//! # Catmull-Clark Subdivision
//!
//! One pass turns every n-gon into n quads:
//! 1. For each face, compute the face point (centroid)
//! 2. For each edge, compute the edge point (interior: average of the two
//!    endpoints and the two adjacent face points; boundary: midpoint)
//! 3. Reposition original vertices (interior: `(F + 2R + (n-2)P) / n`;
//!    boundary: `3/4 P + 1/8 (A + B)`)
//! 4. Connect corner, edge points, and face point into quads
//!
//! UV coordinates survive the pass so a later texture bake still works: face
//! and edge points average the UVs of the vertices they derive from, and
//! original vertices keep their own UV. Normals and colors are stale after
//! subdivision and are dropped.

use std::collections::HashMap;

use glam::{DVec2, DVec3};
use mesh_core::{Mesh, MeshError};

/// Canonical edge key: ordered pair of vertex indices.
type EdgeKey = (u32, u32);

fn edge_key(a: u32, b: u32) -> EdgeKey {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Adjacency derived in one sweep over the face loops.
struct Adjacency {
    /// Edge -> indices of the faces sharing it (1 for boundary, 2 interior)
    edge_faces: HashMap<EdgeKey, Vec<usize>>,
    /// Vertex -> indices of incident faces
    vertex_faces: Vec<Vec<usize>>,
    /// Vertex -> incident edges
    vertex_edges: Vec<Vec<EdgeKey>>,
}

fn build_adjacency(mesh: &Mesh) -> Result<Adjacency, MeshError> {
    let mut edge_faces: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
    let mut vertex_faces = vec![Vec::new(); mesh.vertex_count()];
    let mut vertex_edges: Vec<Vec<EdgeKey>> = vec![Vec::new(); mesh.vertex_count()];

    for (fi, face) in mesh.faces().iter().enumerate() {
        for (i, &v) in face.iter().enumerate() {
            vertex_faces[v as usize].push(fi);

            let next = face[(i + 1) % face.len()];
            let key = edge_key(v, next);
            let entry = edge_faces.entry(key).or_default();
            entry.push(fi);
            if entry.len() > 2 {
                return Err(MeshError::NonManifoldEdge {
                    v0: key.0,
                    v1: key.1,
                    faces: entry.len(),
                });
            }

            for endpoint in [key.0, key.1] {
                let edges = &mut vertex_edges[endpoint as usize];
                if !edges.contains(&key) {
                    edges.push(key);
                }
            }
        }
    }

    Ok(Adjacency {
        edge_faces,
        vertex_faces,
        vertex_edges,
    })
}

/// Applies one Catmull-Clark pass to the mesh.
///
/// The vertex count strictly increases (every face and every edge contributes
/// a new vertex). Fails on empty meshes, invalid faces, and edges shared by
/// more than two faces.
pub fn catmull_clark(mesh: &mut Mesh) -> Result<(), MeshError> {
    if mesh.is_empty() || mesh.face_count() == 0 {
        return Err(MeshError::EmptyMesh);
    }
    mesh.validate()?;

    let adjacency = build_adjacency(mesh)?;
    let uvs = mesh.uvs().map(<[DVec2]>::to_vec);

    // Step 1: face points.
    let face_points: Vec<DVec3> = mesh
        .faces()
        .iter()
        .map(|face| {
            face.iter().map(|&v| mesh.vertex(v)).sum::<DVec3>() / face.len() as f64
        })
        .collect();
    let face_uv_points: Option<Vec<DVec2>> = uvs.as_ref().map(|uvs| {
        mesh.faces()
            .iter()
            .map(|face| {
                face.iter().map(|&v| uvs[v as usize]).sum::<DVec2>() / face.len() as f64
            })
            .collect()
    });

    // Step 2: edge points, indexed after the repositioned originals.
    let original_count = mesh.vertex_count() as u32;
    let mut edge_index: HashMap<EdgeKey, u32> = HashMap::with_capacity(adjacency.edge_faces.len());
    let mut edge_positions: Vec<DVec3> = Vec::with_capacity(adjacency.edge_faces.len());
    let mut edge_uvs: Vec<DVec2> = Vec::new();

    let mut edges: Vec<&EdgeKey> = adjacency.edge_faces.keys().collect();
    edges.sort_unstable(); // deterministic vertex numbering
    for &&(a, b) in &edges {
        let pa = mesh.vertex(a);
        let pb = mesh.vertex(b);
        let adjacent = &adjacency.edge_faces[&(a, b)];

        let position = if adjacent.len() == 2 {
            (pa + pb + face_points[adjacent[0]] + face_points[adjacent[1]]) / 4.0
        } else {
            (pa + pb) * 0.5
        };

        edge_index.insert((a, b), original_count + edge_positions.len() as u32);
        edge_positions.push(position);

        if let Some(uvs) = &uvs {
            edge_uvs.push((uvs[a as usize] + uvs[b as usize]) * 0.5);
        }
    }

    // Step 3: reposition original vertices.
    let mut new_positions: Vec<DVec3> = Vec::with_capacity(mesh.vertex_count());
    for (vi, position) in mesh.vertices().iter().enumerate() {
        let faces = &adjacency.vertex_faces[vi];
        let edges = &adjacency.vertex_edges[vi];

        let boundary_edges: Vec<EdgeKey> = edges
            .iter()
            .filter(|key| adjacency.edge_faces[*key].len() == 1)
            .copied()
            .collect();

        let position = if faces.is_empty() {
            // Isolated vertex: nothing to smooth against.
            *position
        } else if boundary_edges.is_empty() {
            // Interior: (F + 2R + (n - 2) P) / n
            let n = faces.len() as f64;
            let f = faces
                .iter()
                .map(|&fi| face_points[fi])
                .sum::<DVec3>()
                / n;
            let r = edges
                .iter()
                .map(|&(a, b)| (mesh.vertex(a) + mesh.vertex(b)) * 0.5)
                .sum::<DVec3>()
                / edges.len() as f64;
            (f + 2.0 * r + (n - 2.0) * *position) / n
        } else if boundary_edges.len() == 2 {
            // Boundary crease: 3/4 P + 1/8 (A + B)
            let neighbor = |key: EdgeKey| {
                let other = if key.0 as usize == vi { key.1 } else { key.0 };
                mesh.vertex(other)
            };
            0.75 * *position + 0.125 * (neighbor(boundary_edges[0]) + neighbor(boundary_edges[1]))
        } else {
            // Corner or non-disk boundary: leave it pinned.
            *position
        };
        new_positions.push(position);
    }

    // Assemble the refined mesh.
    let face_count: usize = mesh.faces().iter().map(Vec::len).sum();
    let mut out = Mesh::with_capacity(
        new_positions.len() + edge_positions.len() + face_points.len(),
        face_count,
    );

    for p in new_positions {
        out.add_vertex(p);
    }
    for p in edge_positions {
        out.add_vertex(p);
    }
    let face_point_base = out.vertex_count() as u32;
    for p in &face_points {
        out.add_vertex(*p);
    }

    if let (Some(uvs), Some(face_uv_points)) = (&uvs, &face_uv_points) {
        let mut new_uvs = Vec::with_capacity(out.vertex_count());
        new_uvs.extend_from_slice(uvs);
        new_uvs.extend_from_slice(&edge_uvs);
        new_uvs.extend_from_slice(face_uv_points);
        out.set_uvs(new_uvs);
    }

    // Step 4: one quad per face corner.
    for (fi, face) in mesh.faces().iter().enumerate() {
        let n = face.len();
        let fp = face_point_base + fi as u32;
        for i in 0..n {
            let v = face[i];
            let e_next = edge_index[&edge_key(v, face[(i + 1) % n])];
            let e_prev = edge_index[&edge_key(face[(i + n - 1) % n], v)];
            out.add_face(vec![v, e_next, fp, e_prev]);
        }
    }

    if let Some(texture) = mesh.take_texture() {
        out.set_texture(texture);
    }

    *mesh = out;
    Ok(())
}

/// Applies multiple Catmull-Clark passes in sequence.
pub fn catmull_clark_iterations(mesh: &mut Mesh, iterations: u32) -> Result<(), MeshError> {
    for _ in 0..iterations {
        catmull_clark(mesh)?;
    }
    Ok(())
}
