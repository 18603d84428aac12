// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Vector3f, FLOAT_MIN, FLOAT_MAX };
use super::ray::Ray3f;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub p_min: Vector3f,
    pub p_max: Vector3f
}

impl Default for AABB {
    fn default() -> Self {
        Self { p_min: Vector3f::new(FLOAT_MAX, FLOAT_MAX, FLOAT_MAX),
               p_max: Vector3f::new(FLOAT_MIN, FLOAT_MIN, FLOAT_MIN) }
    }
}

impl AABB {
    pub fn new(a: Vector3f, b: Vector3f) -> Self {
        Self { p_min: a.inf(&b), p_max: a.sup(&b) }
    }

    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Vector3f>,
    {
        let mut bound = Self::default();
        for p in points {
            bound.expand_by_point(p);
        }
        bound
    }

    pub fn center(&self) -> Vector3f {
        0.5 * (self.p_min + self.p_max)
    }

    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }

    pub fn expand_by_point(&mut self, p: &Vector3f) {
        self.p_min = self.p_min.inf(p);
        self.p_max = self.p_max.sup(p);
    }

    pub fn expand_by_aabb(&mut self, other: &AABB) {
        self.p_min = self.p_min.inf(&other.p_min);
        self.p_max = self.p_max.sup(&other.p_max);
    }

    /// Slab test against the ray's current [min_t, max_t] segment.
    pub fn ray_intersect(&self, ray: &Ray3f) -> bool {
        if !self.is_valid() {
            return false;
        }

        let o = ray.origin();
        let d = ray.dir();
        let mut t_min = ray.min_t;
        let mut t_max = ray.max_t;

        for axis in 0..3 {
            if d[axis].abs() < 1e-8 {
                if o[axis] < self.p_min[axis] || o[axis] > self.p_max[axis] {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / d[axis];
            let mut t0 = (self.p_min[axis] - o[axis]) * inv;
            let mut t1 = (self.p_max[axis] - o[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max < t_min {
                return false;
            }
        }

        true
    }

    pub fn surface_area(&self) -> Float {
        let d = self.diagonal();
        2.0 * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    pub fn max_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    pub fn is_valid(&self) -> bool {
        (0..3).all(|axis| self.p_min[axis] <= self.p_max[axis])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_geometry() {
        let mut bbox = AABB::new(Vector3f::new(1.0, 7.0, 3.0), Vector3f::new(4.0, 4.0, 4.0));
        assert_eq!(bbox.p_min, Vector3f::new(1.0, 4.0, 3.0));
        assert_eq!(bbox.p_max, Vector3f::new(4.0, 7.0, 4.0));
        assert!((bbox.center() - Vector3f::new(2.5, 5.5, 3.5)).norm() < 1e-6);
        assert!((bbox.surface_area() - 30.0).abs() < 1e-5);

        bbox.expand_by_point(&Vector3f::new(-1.0, 5.0, 6.0));
        assert_eq!(bbox.p_min.x, -1.0);
        assert_eq!(bbox.p_max.z, 6.0);
        assert_eq!(bbox.max_extent(), 0);

        assert!(!AABB::default().is_valid());
    }

    #[test]
    fn test_aabb_ray_intersect() {
        let bbox = AABB::new(Vector3f::new(-1.0, -1.0, -1.0), Vector3f::new(1.0, 1.0, 1.0));

        let inside = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, 1.0, 1.0), Some(0.0), Some(1.0));
        assert!(bbox.ray_intersect(&inside));

        let towards = Ray3f::new(Vector3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(bbox.ray_intersect(&towards));

        let away = Ray3f::new(Vector3f::new(-1.1, 0.0, 0.0), Vector3f::new(-0.1, 10.0, 10.0), None, None);
        assert!(!bbox.ray_intersect(&away));
    }
}
