// Copyright @yucwang 2026

use crate::core::control_grid::{ControlGrid, GRID_SIZE};
use crate::math::bernstein::{bernstein3, bernstein3_derivative};
use crate::math::constants::{Float, Vector3f};
use crate::math::vector::normalize_or_default;

fn tensor_sum(grid: &ControlGrid, bu: &[Float; 4], bv: &[Float; 4]) -> Vector3f {
    let mut p = Vector3f::zeros();
    for i in 0..GRID_SIZE {
        for j in 0..GRID_SIZE {
            p += grid.get(i, j) * (bu[i] * bv[j]);
        }
    }
    p
}

/// Surface point P(u, v).
pub fn evaluate(grid: &ControlGrid, u: Float, v: Float) -> Vector3f {
    tensor_sum(grid, &bernstein3(u), &bernstein3(v))
}

/// Partial derivative dP/du.
pub fn evaluate_du(grid: &ControlGrid, u: Float, v: Float) -> Vector3f {
    tensor_sum(grid, &bernstein3_derivative(u), &bernstein3(v))
}

/// Partial derivative dP/dv.
pub fn evaluate_dv(grid: &ControlGrid, u: Float, v: Float) -> Vector3f {
    tensor_sum(grid, &bernstein3(u), &bernstein3_derivative(v))
}

/// Unit normal Pu x Pv, +Z where the tangent plane degenerates.
pub fn normal(grid: &ControlGrid, u: Float, v: Float) -> Vector3f {
    normalize_or_default(&evaluate_du(grid, u, v).cross(&evaluate_dv(grid, u, v)))
}
