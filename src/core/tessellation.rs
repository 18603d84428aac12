// Copyright @yucwang 2026

use crate::core::control_grid::ControlGrid;
use crate::core::patch;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::vector::face_normal;

pub const MIN_RESOLUTION: u32 = 1;
pub const MAX_RESOLUTION: u32 = 100;
pub const DEFAULT_RESOLUTION: u32 = 10;

pub fn clamp_resolution(resolution: u32) -> u32 {
    resolution.max(MIN_RESOLUTION).min(MAX_RESOLUTION)
}

/// Regular sampling of a patch: `(N + 1)^2` samples and `2 N^2` triangles.
#[derive(Debug, Clone)]
pub struct PatchMesh {
    resolution: u32,
    positions: Vec<Vector3f>,
    normals: Vec<Vector3f>,
    uvs: Vec<Vector2f>,
    triangles: Vec<[usize; 3]>,
}

impl PatchMesh {
    /// Samples `grid` on an `(N + 1) x (N + 1)` lattice, N clamped to 1..=100.
    pub fn build(grid: &ControlGrid, resolution: u32) -> Self {
        let n = clamp_resolution(resolution) as usize;
        let side = n + 1;

        let mut positions = Vec::with_capacity(side * side);
        let mut normals = Vec::with_capacity(side * side);
        let mut uvs = Vec::with_capacity(side * side);
        for vi in 0..side {
            let v = vi as Float / n as Float;
            for ui in 0..side {
                let u = ui as Float / n as Float;
                positions.push(patch::evaluate(grid, u, v));
                normals.push(patch::normal(grid, u, v));
                uvs.push(Vector2f::new(u, v));
            }
        }

        let sample = |ui: usize, vi: usize| vi * side + ui;
        let mut triangles = Vec::with_capacity(2 * n * n);
        for vi in 0..n {
            for ui in 0..n {
                let p00 = sample(ui, vi);
                let p10 = sample(ui + 1, vi);
                let p01 = sample(ui, vi + 1);
                let p11 = sample(ui + 1, vi + 1);
                triangles.push([p00, p10, p11]);
                triangles.push([p00, p11, p01]);
            }
        }

        log::debug!("Tessellated patch: resolution = {}, triangles = {}.", n, triangles.len());

        Self { resolution: n as u32, positions, normals, uvs, triangles }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn positions(&self) -> &[Vector3f] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vector3f] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Vector2f] {
        &self.uvs
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertices(&self, tri: usize) -> (Vector3f, Vector3f, Vector3f) {
        let [a, b, c] = self.triangles[tri];
        (self.positions[a], self.positions[b], self.positions[c])
    }

    /// Flat-shading normal of one triangle, +Z for degenerate triangles.
    pub fn face_normal(&self, tri: usize) -> Vector3f {
        let (p0, p1, p2) = self.vertices(tri);
        face_normal(&p0, &p1, &p2)
    }
}
