// Copyright @yucwang 2023

use crate::core::shape::Shape;
use crate::core::interaction::SurfaceIntersection;
use crate::math::aabb::AABB;
use crate::math::constants::{ EPSILON, Float, Vector2f, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;
use crate::math::vector::face_normal;

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    p0: Vector3f,
    p1: Vector3f,
    p2: Vector3f
}

impl Shape for Triangle {
    fn bounding_box(&self) -> AABB {
        let mut bound = AABB::new(self.p0, self.p1);
        bound.expand_by_point(&self.p2);

        bound
    }

    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let t = self.hit_distance(ray)?;
        let p = ray.at(t);
        let bary = self.barycentric(&p);
        let n = self.geometric_normal();
        Some(SurfaceIntersection::new(p, n, n, Vector2f::new(bary.y, bary.z), t))
    }

    fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.hit_distance(ray).is_some()
    }
}

impl Triangle {
    pub fn new(new_p0: Vector3f, new_p1: Vector3f, new_p2: Vector3f) -> Self {
        Triangle {
            p0: new_p0,
            p1: new_p1,
            p2: new_p2,
        }
    }

    /// Ray parameter of the hit, if the ray crosses the triangle inside its segment.
    fn hit_distance(&self, ray: &Ray3f) -> Option<Float> {
        let raw_normal = (self.p1 - self.p0).cross(&(self.p2 - self.p0));
        if raw_normal.norm_squared() == 0.0 {
            return None;
        }
        let geo_normal = raw_normal.normalize();

        let n_dot_dir = geo_normal.dot(&ray.dir());
        if n_dot_dir > -EPSILON && n_dot_dir < EPSILON {
            return None;
        }

        let plane_d = geo_normal.dot(&self.p0);
        let t = (plane_d - geo_normal.dot(&ray.origin())) / n_dot_dir;
        if !ray.contains(t) {
            return None;
        }

        if self.is_in_triangle(&ray.at(t)) {
            Some(t)
        } else {
            None
        }
    }

    fn is_in_triangle(&self, p: &Vector3f) -> bool {
        let geo_normal = (self.p1 - self.p0).cross(&(self.p2 - self.p0));

        let n0 = (self.p1 - self.p0).cross(&(p - self.p0));
        let n1 = (self.p2 - self.p1).cross(&(p - self.p1));
        let n2 = (self.p0 - self.p2).cross(&(p - self.p2));

        n0.dot(&geo_normal) >= 0.0 && n1.dot(&geo_normal) >= 0.0 && n2.dot(&geo_normal) >= 0.0
    }

    pub fn geometric_normal(&self) -> Vector3f {
        face_normal(&self.p0, &self.p1, &self.p2)
    }

    pub fn vertices(&self) -> (Vector3f, Vector3f, Vector3f) {
        (self.p0, self.p1, self.p2)
    }

    pub fn barycentric(&self, p: &Vector3f) -> Vector3f {
        let v0 = self.p1 - self.p0;
        let v1 = self.p2 - self.p0;
        let v2 = *p - self.p0;

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < 1e-12 {
            return Vector3f::new(1.0, 0.0, 0.0);
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Vector3f::new(1.0 - v - w, v, w)
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::new(transform.apply_point(self.p0),
                  transform.apply_point(self.p1),
                  transform.apply_point(self.p2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(Vector3f::new(1.0, 1.0, 0.0),
                      Vector3f::new(2.0, 1.0, 0.0),
                      Vector3f::new(2.0, 2.0, 0.0))
    }

    #[test]
    fn test_bounding_box() {
        let triangle = Triangle::new(Vector3f::new(1.0, 1.0, 1.0),
                                     Vector3f::new(1.5, 4.0, -1.0),
                                     Vector3f::new(-1.0, 2.0, 2.5));
        let bounding_box = triangle.bounding_box();

        assert_eq!(bounding_box.p_min, Vector3f::new(-1.0, 1.0, -1.0));
        assert_eq!(bounding_box.p_max, Vector3f::new(1.5, 4.0, 2.5));
    }

    #[test]
    fn test_is_in_triangle() {
        let triangle = unit_triangle();
        assert!(triangle.is_in_triangle(&Vector3f::new(1.5, 1.1, 0.0)));
        assert!(!triangle.is_in_triangle(&Vector3f::new(1.5, 2.0, 0.0)));
    }

    #[test]
    fn test_ray_intersection_both_sides() {
        let triangle = unit_triangle();

        let down = Ray3f::new(Vector3f::new(1.5, 1.1, 3.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = triangle.ray_intersection(&down).expect("hit from above");
        assert!((hit.t() - 3.0).abs() < 1e-5);
        assert!((hit.p() - Vector3f::new(1.5, 1.1, 0.0)).norm() < 1e-5);

        let up = Ray3f::new(Vector3f::new(1.5, 1.1, -3.0), Vector3f::new(0.0, 0.0, 1.0), None, None);
        assert!(triangle.ray_intersection_t(&up));

        let away = Ray3f::new(Vector3f::new(1.5, 1.1, 3.0), Vector3f::new(0.0, 0.0, 1.0), None, None);
        assert!(!triangle.ray_intersection_t(&away));
    }

    #[test]
    fn test_degenerate_triangle_is_never_hit() {
        let p = Vector3f::new(0.0, 0.0, 0.0);
        let triangle = Triangle::new(p, p, Vector3f::new(1.0, 0.0, 0.0));
        let ray = Ray3f::new(Vector3f::new(0.5, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(triangle.ray_intersection(&ray).is_none());
        assert_eq!(triangle.geometric_normal(), Vector3f::new(0.0, 0.0, 1.0));
    }
}
