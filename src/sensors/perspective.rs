// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

pub struct PerspectiveCamera {
    origin: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    tan_half_fov_y: Float,
    aspect: Float,
    near_clip: Float,
    far_clip: Float,
    width: usize,
    height: usize,
}

impl PerspectiveCamera {
    pub fn new(origin: Vector3f,
               target: Vector3f,
               up: Vector3f,
               fov_y_radians: Float,
               aspect: Float,
               width: usize,
               height: usize,
               near_clip: Float,
               far_clip: Float) -> Self {
        let forward = (target - origin).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward).normalize();

        Self {
            origin,
            forward,
            right,
            up,
            tan_half_fov_y: (0.5 * fov_y_radians).tan(),
            aspect,
            near_clip,
            far_clip,
            width,
            height,
        }
    }
}

impl Sensor for PerspectiveCamera {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f {
        let px = (2.0 * u.x - 1.0) * self.aspect * self.tan_half_fov_y;
        let py = (1.0 - 2.0 * u.y) * self.tan_half_fov_y;

        let d_camera = Vector3f::new(px, py, 1.0).normalize();
        let dir = (self.right * d_camera.x + self.up * d_camera.y + self.forward * d_camera.z).normalize();

        let inv_z = if d_camera.z != 0.0 { 1.0 / d_camera.z } else { std::f32::MAX };
        let near_t = self.near_clip * inv_z;
        let far_t = self.far_clip * inv_z;
        let origin = self.origin + dir * near_t;
        Ray3f::new(origin, dir, Some(0.0), Some(far_t - near_t))
    }

    fn project(&self, p: &Vector3f) -> Option<Vector2f> {
        let d = p - self.origin;
        let z = d.dot(&self.forward);
        if z <= self.near_clip {
            return None;
        }
        let x_ndc = d.dot(&self.right) / (z * self.aspect * self.tan_half_fov_y);
        let y_ndc = d.dot(&self.up) / (z * self.tan_half_fov_y);
        Some(Vector2f::new(0.5 * (x_ndc + 1.0) * self.width as Float,
                           0.5 * (1.0 - y_ndc) * self.height as Float))
    }

    fn origin(&self) -> Vector3f {
        self.origin
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn describe(&self) -> String {
        format!("PerspectiveCamera {}x{} at ({:.3}, {:.3}, {:.3})",
                self.width, self.height, self.origin.x, self.origin.y, self.origin.z)
    }
}
