//! # Wavefront OBJ Reader
//!
//! Loads geometry, UV coordinates, normals, and the diffuse texture
//! referenced through the MTL library.
//!
//! Format reference:
//! - `v x y z`          (vertex position)
//! - `vt u v`           (texture coordinate)
//! - `vn nx ny nz`      (vertex normal)
//! - `f v/vt/vn ...`    (face; `vt`/`vn` optional, indices 1-based or negative)
//! - `mtllib file.mtl`  (material library)
//! - `usemtl name`      (material binding; its `map_Kd` becomes the texture)
//!
//! OBJ attributes are wedge-indexed (a face corner may combine any position
//! with any UV), while [`Mesh`] stores attributes per vertex. Corners are
//! split on unique (position, uv, normal) triples so every output vertex has
//! one UV and one normal.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glam::{DVec2, DVec3};
use mesh_core::{Mesh, Texture};
use tracing::{debug, warn};

use crate::error::IoError;

/// One face corner as written in the file, after index resolution.
type Wedge = (u32, Option<u32>, Option<u32>);

/// Reads an OBJ file (and any referenced material/texture) into a mesh.
pub fn read_obj(path: impl AsRef<Path>) -> Result<Mesh, IoError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut positions: Vec<DVec3> = Vec::new();
    let mut texcoords: Vec<DVec2> = Vec::new();
    let mut normals: Vec<DVec3> = Vec::new();
    let mut faces: Vec<Vec<Wedge>> = Vec::new();
    let mut mtl_libraries: Vec<String> = Vec::new();
    let mut used_material: Option<String> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match keyword {
            "v" => positions.push(parse_vec3(path, line_no, &rest)?),
            "vt" => texcoords.push(parse_vec2(path, line_no, &rest)?),
            "vn" => normals.push(parse_vec3(path, line_no, &rest)?),
            "f" => {
                if rest.len() < 3 {
                    return Err(IoError::parse(
                        path,
                        line_no,
                        format!("face has {} corners (expected at least 3)", rest.len()),
                    ));
                }
                let mut face = Vec::with_capacity(rest.len());
                for corner in &rest {
                    face.push(parse_wedge(
                        path,
                        line_no,
                        corner,
                        positions.len(),
                        texcoords.len(),
                        normals.len(),
                    )?);
                }
                faces.push(face);
            }
            "mtllib" => mtl_libraries.extend(rest.iter().map(|s| s.to_string())),
            "usemtl" => {
                if used_material.is_none() {
                    used_material = rest.first().map(|s| s.to_string());
                }
            }
            // Grouping and shading statements carry no geometry.
            "g" | "o" | "s" | "l" | "p" => {}
            other => {
                debug!(keyword = other, line = line_no, "skipping OBJ statement");
            }
        }
    }

    if faces.is_empty() {
        return Err(IoError::NoGeometry { path: path.into() });
    }

    // Split wedges into per-vertex attributes.
    let has_uvs = !texcoords.is_empty();
    let has_normals = !normals.is_empty();

    let mut mesh = Mesh::with_capacity(positions.len(), faces.len());
    let mut out_uvs: Vec<DVec2> = Vec::new();
    let mut out_normals: Vec<DVec3> = Vec::new();
    let mut remap: HashMap<Wedge, u32> = HashMap::new();

    for face in &faces {
        let mut indices = Vec::with_capacity(face.len());
        for wedge in face {
            let index = match remap.get(wedge) {
                Some(&index) => index,
                None => {
                    let (vi, vti, vni) = *wedge;
                    let index = mesh.add_vertex(positions[vi as usize]);
                    if has_uvs {
                        out_uvs.push(vti.map_or(DVec2::ZERO, |i| texcoords[i as usize]));
                    }
                    if has_normals {
                        out_normals.push(vni.map_or(DVec3::ZERO, |i| normals[i as usize]));
                    }
                    remap.insert(*wedge, index);
                    index
                }
            };
            indices.push(index);
        }
        mesh.add_face(indices);
    }

    if has_uvs {
        mesh.set_uvs(out_uvs);
    }
    if has_normals {
        mesh.set_normals(out_normals);
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        uvs = has_uvs,
        "loaded OBJ geometry"
    );

    if let Some(texture_path) = resolve_texture(path, &mtl_libraries, used_material.as_deref())? {
        let texture = Texture::open(&texture_path).map_err(|source| IoError::Texture {
            path: texture_path.clone(),
            source,
        })?;
        debug!(texture = %texture_path.display(), "bound diffuse texture");
        mesh.set_texture(texture);
    }

    mesh.validate()?;
    Ok(mesh)
}

fn parse_f64(path: &Path, line: usize, token: &str) -> Result<f64, IoError> {
    token
        .parse::<f64>()
        .map_err(|_| IoError::parse(path, line, format!("invalid number '{token}'")))
}

fn parse_vec3(path: &Path, line: usize, rest: &[&str]) -> Result<DVec3, IoError> {
    if rest.len() < 3 {
        return Err(IoError::parse(path, line, "expected three coordinates"));
    }
    Ok(DVec3::new(
        parse_f64(path, line, rest[0])?,
        parse_f64(path, line, rest[1])?,
        parse_f64(path, line, rest[2])?,
    ))
}

fn parse_vec2(path: &Path, line: usize, rest: &[&str]) -> Result<DVec2, IoError> {
    if rest.len() < 2 {
        return Err(IoError::parse(path, line, "expected two coordinates"));
    }
    Ok(DVec2::new(
        parse_f64(path, line, rest[0])?,
        parse_f64(path, line, rest[1])?,
    ))
}

/// Resolves a 1-based (or negative, counted from the end) OBJ index.
fn resolve_index(path: &Path, line: usize, token: &str, len: usize) -> Result<u32, IoError> {
    let value: i64 = token
        .parse()
        .map_err(|_| IoError::parse(path, line, format!("invalid index '{token}'")))?;
    let resolved = if value > 0 {
        value - 1
    } else if value < 0 {
        len as i64 + value
    } else {
        return Err(IoError::index(path, line, "OBJ indices are 1-based"));
    };
    if resolved < 0 || resolved as usize >= len {
        return Err(IoError::index(
            path,
            line,
            format!("index {value} out of range (have {len})"),
        ));
    }
    Ok(resolved as u32)
}

/// Parses one face corner: `v`, `v/vt`, `v//vn`, or `v/vt/vn`.
fn parse_wedge(
    path: &Path,
    line: usize,
    corner: &str,
    positions: usize,
    texcoords: usize,
    normals: usize,
) -> Result<Wedge, IoError> {
    let mut fields = corner.split('/');
    let v = fields
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IoError::parse(path, line, format!("empty face corner '{corner}'")))?;
    let vi = resolve_index(path, line, v, positions)?;

    let vti = match fields.next() {
        Some("") | None => None,
        Some(token) => Some(resolve_index(path, line, token, texcoords)?),
    };
    let vni = match fields.next() {
        Some("") | None => None,
        Some(token) => Some(resolve_index(path, line, token, normals)?),
    };

    Ok((vi, vti, vni))
}

/// Finds the diffuse texture (`map_Kd`) for the used material.
///
/// A missing MTL file is only a warning: geometry without a texture is still
/// loadable, and the colorize step reports the absence precisely.
fn resolve_texture(
    obj_path: &Path,
    libraries: &[String],
    used_material: Option<&str>,
) -> Result<Option<PathBuf>, IoError> {
    let directory = obj_path.parent().unwrap_or_else(|| Path::new("."));

    for library in libraries {
        let mtl_path = directory.join(library);
        let file = match File::open(&mtl_path) {
            Ok(file) => file,
            Err(error) => {
                warn!(mtl = %mtl_path.display(), %error, "cannot open material library");
                continue;
            }
        };

        let mut current: Option<String> = None;
        let mut first_map: Option<PathBuf> = None;
        for line in BufReader::new(file).lines() {
            let line = line?;
            let line = line.trim();
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("newmtl") => current = parts.next().map(|s| s.to_string()),
                Some("map_Kd") => {
                    // Options may precede the file name; the name is last.
                    if let Some(name) = parts.last() {
                        let texture = directory.join(name);
                        if used_material.is_some() && current.as_deref() == used_material {
                            return Ok(Some(texture));
                        }
                        first_map.get_or_insert(texture);
                    }
                }
                _ => {}
            }
        }
        if let Some(texture) = first_map {
            return Ok(Some(texture));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

    #[test]
    fn test_read_plain_triangle() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "tri.obj", TRIANGLE);
        let mesh = read_obj(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.uvs().is_none());
        assert!(mesh.texture().is_none());
    }

    #[test]
    fn test_read_negative_indices() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "neg.obj",
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n",
        );
        let mesh = read_obj(&path).unwrap();
        assert_eq!(mesh.faces()[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_wedge_splitting_duplicates_shared_positions() {
        // Two triangles share positions 1 and 3 but with different UVs, so
        // the shared corners split into distinct vertices.
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "split.obj",
            "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
f 1/1 2/2 3/3
f 1/2 3/4 4/1
",
        );
        let mesh = read_obj(&path).unwrap();
        assert_eq!(mesh.face_count(), 2);
        // 4 positions, 6 unique (position, uv) pairs.
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.uvs().unwrap().len(), 6);
    }

    #[test]
    fn test_read_texture_through_mtl() {
        let dir = tempfile::tempdir().unwrap();
        let texture = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        texture.save(dir.path().join("skin.png")).unwrap();
        write_file(
            dir.path(),
            "cube.mtl",
            "newmtl skin\nKd 1 1 1\nmap_Kd skin.png\n",
        );
        let path = write_file(
            dir.path(),
            "tex.obj",
            "\
mtllib cube.mtl
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
usemtl skin
f 1/1 2/2 3/3
",
        );
        let mesh = read_obj(&path).unwrap();
        assert!(mesh.texture().is_some());
        assert_eq!(mesh.uvs().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_mtl_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "orphan.obj",
            &format!("mtllib nowhere.mtl\n{TRIANGLE}"),
        );
        let mesh = read_obj(&path).unwrap();
        assert!(mesh.texture().is_none());
    }

    #[test]
    fn test_malformed_vertex_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.obj", "v 0 zero 0\nf 1 1 1\n");
        match read_obj(&path) {
            Err(IoError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_face_index_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "oob.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n");
        assert!(matches!(
            read_obj(&path),
            Err(IoError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_no_faces_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "points.obj", "v 0 0 0\nv 1 0 0\n");
        assert!(matches!(read_obj(&path), Err(IoError::NoGeometry { .. })));
    }
}
