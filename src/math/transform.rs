// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Matrix4f, Vector3f, DEG_TO_RAD };

use nalgebra::{ Point3, Vector3 };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

impl Transform {
    pub fn new(matrix: Matrix4f) -> Self {
        Self { matrix,
               inv_matrix: matrix.try_inverse().unwrap_or_else(Matrix4f::identity) }
    }

    pub fn translate(offset: Vector3f) -> Self {
        Self::new(Matrix4f::new_translation(&offset))
    }

    pub fn rotate_x(degrees: Float) -> Self {
        Self::new(Matrix4f::from_axis_angle(&Vector3::x_axis(), degrees * DEG_TO_RAD))
    }

    pub fn rotate_y(degrees: Float) -> Self {
        Self::new(Matrix4f::from_axis_angle(&Vector3::y_axis(), degrees * DEG_TO_RAD))
    }

    /// `self` applied after `inner`, matching a GL matrix stack where
    /// `self` was pushed first.
    pub fn then(&self, inner: &Transform) -> Self {
        Self::new(self.matrix * inner.matrix)
    }

    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        self.matrix.transform_point(&Point3::from(p)).coords
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        self.matrix.transform_vector(&v)
    }

    // Normals map through the inverse transpose so that n^T x = 0 survives.
    pub fn apply_normal(&self, n: Vector3f) -> Vector3f {
        self.inv_matrix.transpose().transform_vector(&n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_then_rotate_keeps_origin_at_offset() {
        let t = Transform::translate(Vector3f::new(-2.2, 0.0, 0.0))
            .then(&Transform::rotate_x(-20.0))
            .then(&Transform::rotate_y(30.0));
        let p = t.apply_point(Vector3f::zeros());
        assert!((p - Vector3f::new(-2.2, 0.0, 0.0)).norm() < 1e-6);

        let v = t.apply_vector(Vector3f::new(1.0, 0.0, 0.0));
        assert!((v.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let t = Transform::rotate_y(90.0);
        let p = t.apply_point(Vector3f::new(1.0, 0.0, 0.0));
        assert!((p - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-5);

        let n = t.apply_normal(Vector3f::new(0.0, 1.0, 0.0));
        assert!((n - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-5);
    }
}
