// Copyright @yucwang 2026

use crate::math::constants::{Vector2f, Vector3f};
use crate::math::ray::Ray3f;

pub trait Sensor: Sync {
    /// Primary ray through film position `u` in [0, 1]^2, (0, 0) top left.
    fn sample_ray(&self, u: &Vector2f) -> Ray3f;
    /// Window pixel coordinates (top-left origin) of a world point, if it
    /// lies in front of the near plane.
    fn project(&self, p: &Vector3f) -> Option<Vector2f>;
    /// Eye position.
    fn origin(&self) -> Vector3f;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn describe(&self) -> String {
        String::from("Sensor")
    }
}
