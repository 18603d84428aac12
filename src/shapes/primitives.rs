// Copyright @yucwang 2026

use super::triangle_mesh::TriangleMesh;

use crate::math::constants::{Float, Vector2f, Vector3f, PI};

/// Lat-long sphere centered at the origin, poles on the Y axis. Pole cells
/// emit a single triangle.
pub fn uv_sphere(radius: Float, slices: usize, stacks: usize) -> TriangleMesh {
    let slices = slices.max(3);
    let stacks = stacks.max(2);

    let mut positions = Vec::with_capacity((slices + 1) * (stacks + 1));
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());
    for s in 0..=stacks {
        let theta = PI * s as Float / stacks as Float;
        for k in 0..=slices {
            let phi = 2.0 * PI * k as Float / slices as Float;
            let n = Vector3f::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
            positions.push(n * radius);
            normals.push(n);
            uvs.push(Vector2f::new(k as Float / slices as Float, s as Float / stacks as Float));
        }
    }

    let row = slices + 1;
    let mut indices = Vec::with_capacity(2 * slices * (stacks - 1));
    for s in 0..stacks {
        for k in 0..slices {
            let a = s * row + k;
            let d = a + 1;
            let b = a + row;
            let c = b + 1;
            if s + 1 != stacks {
                indices.push([a, c, b]);
            }
            if s != 0 {
                indices.push([a, d, c]);
            }
        }
    }

    TriangleMesh::new(positions, normals, uvs, indices)
}

/// Torus around the Z axis: `minor` is the tube radius, `major` the distance
/// from the center to the tube axis.
pub fn torus(minor: Float, major: Float, sides: usize, rings: usize) -> TriangleMesh {
    let sides = sides.max(3);
    let rings = rings.max(3);

    let mut positions = Vec::with_capacity((sides + 1) * (rings + 1));
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());
    for r in 0..=rings {
        let phi = 2.0 * PI * r as Float / rings as Float;
        let center = Vector3f::new(major * phi.cos(), major * phi.sin(), 0.0);
        for s in 0..=sides {
            let theta = 2.0 * PI * s as Float / sides as Float;
            let n = Vector3f::new(theta.cos() * phi.cos(), theta.cos() * phi.sin(), theta.sin());
            positions.push(center + n * minor);
            normals.push(n);
            uvs.push(Vector2f::new(r as Float / rings as Float, s as Float / sides as Float));
        }
    }

    let row = sides + 1;
    let mut indices = Vec::with_capacity(2 * sides * rings);
    for r in 0..rings {
        for s in 0..sides {
            let a = r * row + s;
            let b = a + row;
            indices.push([a, b, b + 1]);
            indices.push([a, b + 1, a + 1]);
        }
    }

    TriangleMesh::new(positions, normals, uvs, indices)
}

/// Axis-aligned cube, four vertices per face so each face shades flat.
pub fn cube_mesh(half_extent: Float) -> TriangleMesh {
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(12);

    for axis in 0..3 {
        for &sign in &[1.0 as Float, -1.0] {
            let mut n = Vector3f::zeros();
            n[axis] = sign;
            let mut t0 = Vector3f::zeros();
            t0[(axis + 1) % 3] = 1.0;
            let t1 = n.cross(&t0);

            let base = positions.len();
            for &(a, b) in &[(-1.0 as Float, -1.0 as Float), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                positions.push((n + t0 * a + t1 * b) * half_extent);
                normals.push(n);
                uvs.push(Vector2f::new(0.5 * (a + 1.0), 0.5 * (b + 1.0)));
            }
            indices.push([base, base + 1, base + 2]);
            indices.push([base, base + 2, base + 3]);
        }
    }

    TriangleMesh::new(positions, normals, uvs, indices)
}
