// Copyright @yucwang 2023

use super::triangle::Triangle;

use crate::core::bvh::BVH;
use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::core::tessellation::PatchMesh;
use crate::io::obj_utils::{self, ObjLoadError};
use crate::math::aabb::AABB;
use crate::math::constants::{ Vector2f, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;
use crate::math::vector::normalize_or_default;

use std::path::Path;

pub struct TriangleMesh {
    positions: Vec<Vector3f>,
    normals: Vec<Vector3f>,
    uvs: Vec<Vector2f>,
    indices: Vec<[usize; 3]>,
    triangles: Vec<Triangle>,
    bvh: Option<BVH>,
}

impl TriangleMesh {
    /// `normals` and `uvs` are per vertex and may be empty.
    pub fn new(positions: Vec<Vector3f>,
               normals: Vec<Vector3f>,
               uvs: Vec<Vector2f>,
               indices: Vec<[usize; 3]>) -> Self {
        let mut mesh = Self {
            positions,
            normals,
            uvs,
            indices,
            triangles: Vec::new(),
            bvh: None,
        };
        mesh.rebuild();
        mesh
    }

    pub fn from_patch(patch: &PatchMesh) -> Self {
        Self::new(patch.positions().to_vec(),
                  patch.normals().to_vec(),
                  patch.uvs().to_vec(),
                  patch.triangles().to_vec())
    }

    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, ObjLoadError> {
        let obj_set = obj_utils::load_obj_from_file(path)?;
        Ok(Self::from_obj_set(&obj_set))
    }

    /// Flattens every object of an OBJ set into one mesh. Normals and UVs are
    /// kept only when the file supplies one per vertex.
    pub fn from_obj_set(obj_set: &wavefront_obj::obj::ObjSet) -> Self {
        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut uvs = Vec::new();
        let mut indices = Vec::new();
        let mut per_vertex_attributes = true;

        for object in &obj_set.objects {
            let base = positions.len();
            for v in &object.vertices {
                positions.push(Vector3f::new(v.x as f32, v.y as f32, v.z as f32));
            }
            let mut vertex_normals = vec![None; object.vertices.len()];
            let mut vertex_uvs = vec![None; object.vertices.len()];
            for geom in &object.geometry {
                for shape in &geom.shapes {
                    if let wavefront_obj::obj::Primitive::Triangle(a, b, c) = &shape.primitive {
                        let (a, b, c) = (*a, *b, *c);
                        if [a.0, b.0, c.0].iter().any(|&i| i >= object.vertices.len()) {
                            log::warn!("Skipping OBJ face with out-of-range vertex index.");
                            continue;
                        }
                        for corner in [a, b, c] {
                            let n = corner.2.and_then(|i| object.normals.get(i));
                            vertex_normals[corner.0] = n.map(|n| Vector3f::new(n.x as f32, n.y as f32, n.z as f32));
                            let t = corner.1.and_then(|i| object.tex_vertices.get(i));
                            vertex_uvs[corner.0] = t.map(|t| Vector2f::new(t.u as f32, t.v as f32));
                        }
                        indices.push([base + a.0, base + b.0, base + c.0]);
                    }
                }
            }
            if vertex_normals.iter().any(Option::is_none) || vertex_uvs.iter().any(Option::is_none) {
                per_vertex_attributes = false;
            }
            normals.extend(vertex_normals.into_iter().map(|n| n.unwrap_or(Vector3f::zeros())));
            uvs.extend(vertex_uvs.into_iter().map(|t| t.unwrap_or(Vector2f::zeros())));
        }

        if !per_vertex_attributes {
            normals.clear();
            uvs.clear();
        }
        Self::new(positions, normals, uvs, indices)
    }

    pub fn apply_transform(&mut self, transform: &Transform) {
        for p in &mut self.positions {
            *p = transform.apply_point(*p);
        }
        for n in &mut self.normals {
            *n = normalize_or_default(&transform.apply_normal(*n));
        }
        self.rebuild();
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn positions(&self) -> &[Vector3f] {
        &self.positions
    }

    pub fn indices(&self) -> &[[usize; 3]] {
        &self.indices
    }

    fn rebuild(&mut self) {
        self.triangles = self.indices
            .iter()
            .map(|[a, b, c]| Triangle::new(self.positions[*a], self.positions[*b], self.positions[*c]))
            .collect();

        self.bvh = if self.triangles.is_empty() {
            None
        } else {
            Some(BVH::new(self.triangles.iter().map(|t| t.bounding_box()).collect()))
        };
    }

    fn shading_frame(&self, idx: usize, bary: &Vector3f, geo_n: &Vector3f) -> (Vector3f, Vector2f) {
        let [a, b, c] = self.indices[idx];
        let mut sh_n = if self.normals.is_empty() {
            *geo_n
        } else {
            normalize_or_default(&(self.normals[a] * bary.x + self.normals[b] * bary.y + self.normals[c] * bary.z))
        };
        if sh_n.dot(geo_n) < 0.0 {
            sh_n = -sh_n;
        }
        let uv = if self.uvs.is_empty() {
            Vector2f::new(bary.y, bary.z)
        } else {
            self.uvs[a] * bary.x + self.uvs[b] * bary.y + self.uvs[c] * bary.z
        };
        (sh_n, uv)
    }
}

impl Shape for TriangleMesh {
    fn bounding_box(&self) -> AABB {
        AABB::from_points(self.positions.iter())
    }

    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let bvh = self.bvh.as_ref()?;
        let (idx, hit) = bvh.ray_intersection(ray, |prim_idx, ray| {
            self.triangles[prim_idx].ray_intersection(ray).map(|h| (h, h.t()))
        })?;

        let geo_n = hit.geo_normal();
        let bary = self.triangles[idx].barycentric(&hit.p());
        let (sh_n, uv) = self.shading_frame(idx, &bary, &geo_n);
        Some(SurfaceIntersection::new(hit.p(), geo_n, sh_n, uv, hit.t()).with_triangle_index(Some(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::control_grid::ControlGrid;

    fn quad() -> TriangleMesh {
        TriangleMesh::new(vec![Vector3f::new(0.0, 0.0, 0.0),
                               Vector3f::new(1.0, 0.0, 0.0),
                               Vector3f::new(1.0, 1.0, 0.0),
                               Vector3f::new(0.0, 1.0, 0.0)],
                          Vec::new(),
                          Vec::new(),
                          vec![[0, 1, 2], [0, 2, 3]])
    }

    #[test]
    fn test_ray_hits_second_triangle() {
        let mesh = quad();
        let ray = Ray3f::new(Vector3f::new(0.2, 0.7, 2.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = mesh.ray_intersection(&ray).expect("hit");
        assert_eq!(hit.triangle_index(), Some(1));
        assert!((hit.t() - 2.0).abs() < 1e-5);
        assert!((hit.sh_normal() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_transform_moves_bounds() {
        let mut mesh = quad();
        mesh.apply_transform(&Transform::translate(Vector3f::new(2.0, 0.0, -1.0)));
        let bounds = mesh.bounding_box();
        assert_eq!(bounds.p_min, Vector3f::new(2.0, 0.0, -1.0));
        assert_eq!(bounds.p_max, Vector3f::new(3.0, 1.0, -1.0));
    }

    #[test]
    fn test_patch_mesh_interpolates_uv() {
        let patch = PatchMesh::build(&ControlGrid::default(), 8);
        let mesh = TriangleMesh::from_patch(&patch);
        assert_eq!(mesh.len(), 128);

        // The default patch is a height field over x, y in [-1.5, 1.5].
        let ray = Ray3f::new(Vector3f::new(-0.6, 0.3, 5.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = mesh.ray_intersection(&ray).expect("hit patch");
        assert!((hit.uv().x - 0.3).abs() < 1e-3);
        assert!((hit.uv().y - 0.6).abs() < 1e-3);
        assert!(hit.sh_normal().z > 0.0);
    }
}
