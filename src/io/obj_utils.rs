// Copyright @yucwang 2026

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use wavefront_obj::{obj, ParseError};

use crate::core::tessellation::PatchMesh;

#[derive(Debug)]
pub enum ObjLoadError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl From<std::io::Error> for ObjLoadError {
    fn from(err: std::io::Error) -> Self {
        ObjLoadError::Io(err)
    }
}

impl From<ParseError> for ObjLoadError {
    fn from(err: ParseError) -> Self {
        ObjLoadError::Parse(err)
    }
}

impl fmt::Display for ObjLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjLoadError::Io(err) => write!(f, "io error: {}", err),
            ObjLoadError::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl std::error::Error for ObjLoadError {}

pub fn load_obj_from_str<S: AsRef<str>>(input: S) -> Result<obj::ObjSet, ParseError> {
    let triangulated = triangulate_faces(input.as_ref());
    obj::parse(triangulated)
}

pub fn load_obj_from_file<P: AsRef<Path>>(path: P) -> Result<obj::ObjSet, ObjLoadError> {
    let path = path.as_ref();
    log::info!("Loading OBJ mesh from: {}.", path.display());
    let data = fs::read_to_string(path)?;
    let obj_set = load_obj_from_str(data)?;
    Ok(obj_set)
}

// Fans polygons with more than three corners into triangles.
fn triangulate_faces(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for line in input.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("f ") || trimmed.starts_with("f\t") {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.len() > 4 {
                let base = parts[1];
                for i in 2..(parts.len() - 1) {
                    out.push_str("f ");
                    out.push_str(base);
                    out.push(' ');
                    out.push_str(parts[i]);
                    out.push(' ');
                    out.push_str(parts[i + 1]);
                    out.push('\n');
                }
                continue;
            }
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Wavefront OBJ text of a tessellated patch with positions, UVs and normals.
pub fn patch_to_obj_string(mesh: &PatchMesh) -> String {
    let mut out = String::new();
    out.push_str(&format!("# bezier patch, resolution {}\n", mesh.resolution()));
    out.push_str("o patch\n");
    for p in mesh.positions() {
        out.push_str(&format!("v {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
    }
    for t in mesh.uvs() {
        out.push_str(&format!("vt {:.6} {:.6}\n", t.x, t.y));
    }
    for n in mesh.normals() {
        out.push_str(&format!("vn {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
    }
    for [a, b, c] in mesh.triangles() {
        // OBJ indices are 1-based.
        let (a, b, c) = (a + 1, b + 1, c + 1);
        out.push_str(&format!("f {}/{}/{} {}/{}/{} {}/{}/{}\n", a, a, a, b, b, b, c, c, c));
    }
    out
}

pub fn write_patch_obj<P: AsRef<Path>>(mesh: &PatchMesh, path: P) -> Result<(), std::io::Error> {
    let path = path.as_ref();
    let mut file = fs::File::create(path)?;
    file.write_all(patch_to_obj_string(mesh).as_bytes())?;
    log::info!("Patch mesh written to: {} ({} triangles).", path.display(), mesh.triangle_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::control_grid::ControlGrid;

    #[test]
    fn test_load_obj_from_str_basic() {
        let input = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";
        let obj_set = load_obj_from_str(input).expect("failed to parse obj");
        assert_eq!(obj_set.objects.len(), 1);
        let object = &obj_set.objects[0];
        assert_eq!(object.vertices.len(), 3);
        assert_eq!(object.geometry.len(), 1);
    }

    #[test]
    fn test_quad_faces_are_fanned() {
        let input = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";
        let obj_set = load_obj_from_str(input).expect("failed to parse obj");
        let shapes = &obj_set.objects[0].geometry[0].shapes;
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_patch_export_parses_back() {
        let mesh = PatchMesh::build(&ControlGrid::default(), 5);
        let text = patch_to_obj_string(&mesh);
        let obj_set = load_obj_from_str(&text).expect("exported obj parses");
        let object = &obj_set.objects[0];
        assert_eq!(object.vertices.len(), 36);
        assert_eq!(object.tex_vertices.len(), 36);
        assert_eq!(object.normals.len(), 36);
        let triangles: usize = object.geometry.iter().map(|g| g.shapes.len()).sum();
        assert_eq!(triangles, 50);
    }
}
