// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f, FLOAT_MAX};

#[derive(Debug, Clone, Copy)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d.normalize(),
               min_t: min_t.unwrap_or(0.0),
               max_t: max_t.unwrap_or(FLOAT_MAX) }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    pub fn contains(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }

    /// Shrinks the valid segment to end at `t` when `t` lies inside it.
    pub fn clip(&mut self, t: Float) -> bool {
        if !self.contains(t) {
            return false;
        }
        self.max_t = t;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray3f_direction_is_normalized() {
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 3.0, 4.0), None, None);
        assert!((ray.dir().norm() - 1.0).abs() < 1e-6);

        let p = ray.at(5.0);
        assert!((p - Vector3f::new(0.0, 3.0, 4.0)).norm() < 1e-5);
    }

    #[test]
    fn test_ray3f_clip() {
        let mut ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0), Some(0.5), None);
        assert!(!ray.contains(0.25));
        assert!(ray.clip(100.0));
        assert!(!ray.clip(105.0));
        assert_eq!(ray.max_t, 100.0);
    }
}
