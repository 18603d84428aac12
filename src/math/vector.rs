// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// Direction used whenever a normal can't be derived from the geometry.
pub fn default_normal() -> Vector3f {
    Vector3f::new(0.0, 0.0, 1.0)
}

/// Unit vector along `v`, or +Z when `v` has zero length.
pub fn normalize_or_default(v: &Vector3f) -> Vector3f {
    let len = v.norm();
    if len == 0.0 || !len.is_finite() {
        return default_normal();
    }
    v / len
}

pub fn face_normal(p0: &Vector3f, p1: &Vector3f, p2: &Vector3f) -> Vector3f {
    normalize_or_default(&(p1 - p0).cross(&(p2 - p0)))
}

pub fn centroid<'a, I>(points: I) -> Vector3f
where
    I: IntoIterator<Item = &'a Vector3f>,
{
    let mut sum = Vector3f::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p;
        count += 1;
    }
    if count == 0 {
        return sum;
    }
    sum / (count as Float)
}

pub fn clamp01(v: &Vector3f) -> Vector3f {
    v.map(|c| c.max(0.0).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_vector_falls_back() {
        let n = normalize_or_default(&Vector3f::zeros());
        assert_eq!(n, Vector3f::new(0.0, 0.0, 1.0));

        let n = normalize_or_default(&Vector3f::new(3.0, 0.0, 4.0));
        assert!((n - Vector3f::new(0.6, 0.0, 0.8)).norm() < 1e-6);
    }

    #[test]
    fn test_face_normal_of_degenerate_triangle() {
        let p = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(face_normal(&p, &p, &p), default_normal());

        let n = face_normal(&Vector3f::zeros(),
                            &Vector3f::new(1.0, 0.0, 0.0),
                            &Vector3f::new(0.0, 1.0, 0.0));
        assert!((n - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_centroid() {
        let pts = vec![Vector3f::new(0.0, 0.0, 0.0),
                       Vector3f::new(2.0, 0.0, 0.0),
                       Vector3f::new(2.0, 4.0, 0.0),
                       Vector3f::new(0.0, 4.0, 8.0)];
        let c = centroid(pts.iter());
        assert!((c - Vector3f::new(1.0, 2.0, 2.0)).norm() < 1e-6);
        assert_eq!(centroid(Vec::<Vector3f>::new().iter()), Vector3f::zeros());
    }
}
