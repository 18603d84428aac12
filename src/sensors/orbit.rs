// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f, DEG_TO_RAD};
use crate::sensors::perspective::PerspectiveCamera;

/// Step sizes, limits and the reset pose of an orbit camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub distance: Float,
    pub azimuth: Float,
    pub elevation: Float,
    pub fov_y: Float,
    pub turn_step: Float,
    pub zoom_step: Float,
    pub min_distance: Float,
    pub max_distance: Float,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            distance: 6.0,
            azimuth: 45.0,
            elevation: 20.0,
            fov_y: 45.0,
            turn_step: 4.0,
            zoom_step: 0.4,
            min_distance: 1.2,
            max_distance: 50.0,
        }
    }
}

impl OrbitSettings {
    /// Pose used by the three-object picking scene.
    pub fn pick_scene() -> Self {
        Self {
            distance: 8.0,
            azimuth: 30.0,
            elevation: 10.0,
            fov_y: 55.0,
            min_distance: 1.0,
            ..Self::default()
        }
    }
}

const MAX_ELEVATION: Float = 89.0;

/// Spherical camera around a look-at target, angles in degrees, +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub distance: Float,
    pub azimuth: Float,
    pub elevation: Float,
    pub target: Vector3f,
    settings: OrbitSettings,
}

impl OrbitCamera {
    pub fn new(settings: OrbitSettings) -> Self {
        Self {
            distance: settings.distance,
            azimuth: settings.azimuth,
            elevation: settings.elevation.max(-MAX_ELEVATION).min(MAX_ELEVATION),
            target: Vector3f::zeros(),
            settings,
        }
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    /// Back to the initial pose; the target is left for the caller.
    pub fn reset(&mut self) {
        let target = self.target;
        *self = Self::new(self.settings);
        self.target = target;
    }

    pub fn rotate(&mut self, d_azimuth: Float, d_elevation: Float) {
        self.azimuth += d_azimuth * self.settings.turn_step;
        self.elevation = (self.elevation + d_elevation * self.settings.turn_step)
            .max(-MAX_ELEVATION)
            .min(MAX_ELEVATION);
    }

    /// Positive `steps` moves towards the target.
    pub fn zoom(&mut self, steps: Float) {
        self.distance = (self.distance - steps * self.settings.zoom_step)
            .max(self.settings.min_distance)
            .min(self.settings.max_distance);
    }

    pub fn eye(&self) -> Vector3f {
        let az = self.azimuth * DEG_TO_RAD;
        let el = self.elevation * DEG_TO_RAD;
        self.target + self.distance * Vector3f::new(el.cos() * az.cos(), el.sin(), el.cos() * az.sin())
    }

    pub fn sensor(&self, width: usize, height: usize) -> PerspectiveCamera {
        let aspect = width.max(1) as Float / height.max(1) as Float;
        PerspectiveCamera::new(self.eye(),
                               self.target,
                               Vector3f::new(0.0, 1.0, 0.0),
                               self.settings.fov_y * DEG_TO_RAD,
                               aspect,
                               width,
                               height,
                               0.1,
                               100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_position_from_spherical_coordinates() {
        let mut cam = OrbitCamera::new(OrbitSettings { azimuth: 0.0, elevation: 0.0, ..OrbitSettings::default() });
        assert!((cam.eye() - Vector3f::new(6.0, 0.0, 0.0)).norm() < 1e-5);

        cam.target = Vector3f::new(1.0, 2.0, 3.0);
        cam.azimuth = 90.0;
        assert!((cam.eye() - Vector3f::new(1.0, 2.0, 9.0)).norm() < 1e-4);
    }

    #[test]
    fn test_elevation_and_distance_are_clamped() {
        let mut cam = OrbitCamera::new(OrbitSettings::default());
        for _ in 0..100 {
            cam.rotate(0.0, 1.0);
            cam.zoom(1.0);
        }
        assert_eq!(cam.elevation, 89.0);
        assert_eq!(cam.distance, 1.2);

        for _ in 0..500 {
            cam.rotate(0.0, -1.0);
            cam.zoom(-1.0);
        }
        assert_eq!(cam.elevation, -89.0);
        assert_eq!(cam.distance, 50.0);
    }

    #[test]
    fn test_reset_keeps_target() {
        let mut cam = OrbitCamera::new(OrbitSettings::pick_scene());
        cam.target = Vector3f::new(0.0, 0.0, 0.5);
        cam.rotate(3.0, -2.0);
        cam.zoom(2.0);
        cam.reset();
        assert_eq!(cam.azimuth, 30.0);
        assert_eq!(cam.elevation, 10.0);
        assert_eq!(cam.distance, 8.0);
        assert_eq!(cam.target, Vector3f::new(0.0, 0.0, 0.5));
    }
}
