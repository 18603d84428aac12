// Copyright @yucwang 2026

use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

const SAH_BUCKETS: usize = 12;
const MAX_LEAF_SIZE: usize = 4;

#[derive(Clone)]
enum BVHNode {
    Leaf { bounds: AABB, start: usize, count: usize },
    Interior { bounds: AABB, left: usize, right: usize },
}

impl BVHNode {
    fn bounds(&self) -> &AABB {
        match self {
            BVHNode::Leaf { bounds, .. } | BVHNode::Interior { bounds, .. } => bounds,
        }
    }
}

/// Bounding volume hierarchy over primitive bounds. Primitive tests are
/// delegated to the caller through closures.
pub struct BVH {
    nodes: Vec<BVHNode>,
    indices: Vec<usize>,
    prim_bounds: Vec<AABB>,
    prim_centroids: Vec<Vector3f>,
}

impl BVH {
    pub fn new(prim_bounds: Vec<AABB>) -> Self {
        let prim_centroids = prim_bounds.iter().map(|b| b.center()).collect();
        let mut bvh = Self {
            indices: (0..prim_bounds.len()).collect(),
            nodes: Vec::new(),
            prim_bounds,
            prim_centroids,
        };

        if !bvh.indices.is_empty() {
            bvh.build(0, bvh.indices.len());
        }
        log::debug!("BVH built: {} primitives, {} nodes.", bvh.indices.len(), bvh.nodes.len());

        bvh
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Closest hit reported by `hit_fn`, which returns a payload and its ray distance.
    pub fn ray_intersection<F, T>(&self, ray: &Ray3f, mut hit_fn: F) -> Option<(usize, T)>
    where
        F: FnMut(usize, &Ray3f) -> Option<(T, Float)>,
    {
        if self.nodes.is_empty() {
            return None;
        }

        let mut ray = *ray;
        let mut closest: Option<(usize, T)> = None;
        let mut stack = vec![0usize];

        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx];
            if !node.bounds().ray_intersect(&ray) {
                continue;
            }

            match *node {
                BVHNode::Leaf { start, count, .. } => {
                    for &prim_idx in &self.indices[start..start + count] {
                        if let Some((hit, t)) = hit_fn(prim_idx, &ray) {
                            if ray.clip(t) {
                                closest = Some((prim_idx, hit));
                            }
                        }
                    }
                }
                BVHNode::Interior { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }

        closest
    }

    fn bucket_of(&self, prim_idx: usize, axis: usize, axis_min: Float, axis_max: Float) -> usize {
        let c = self.prim_centroids[prim_idx][axis];
        let b = ((c - axis_min) / (axis_max - axis_min) * SAH_BUCKETS as Float) as usize;
        b.min(SAH_BUCKETS - 1)
    }

    fn push_leaf(&mut self, bounds: AABB, start: usize, end: usize) -> usize {
        self.nodes.push(BVHNode::Leaf { bounds, start, count: end - start });
        self.nodes.len() - 1
    }

    fn build(&mut self, start: usize, end: usize) -> usize {
        let mut bounds = AABB::default();
        let mut centroid_bounds = AABB::default();
        for &idx in &self.indices[start..end] {
            bounds.expand_by_aabb(&self.prim_bounds[idx]);
            centroid_bounds.expand_by_point(&self.prim_centroids[idx]);
        }

        let count = end - start;
        if count <= MAX_LEAF_SIZE {
            return self.push_leaf(bounds, start, end);
        }

        let axis = centroid_bounds.max_extent();
        let axis_min = centroid_bounds.p_min[axis];
        let axis_max = centroid_bounds.p_max[axis];
        if axis_max - axis_min < 1e-6 {
            return self.push_leaf(bounds, start, end);
        }

        let mut buckets = [(0usize, AABB::default()); SAH_BUCKETS];
        for i in start..end {
            let idx = self.indices[i];
            let b = self.bucket_of(idx, axis, axis_min, axis_max);
            buckets[b].0 += 1;
            buckets[b].1.expand_by_aabb(&self.prim_bounds[idx]);
        }

        // Surface area heuristic over the bucket boundaries.
        let area = bounds.surface_area().max(1e-6);
        let mut best = (Float::MAX, 0usize);
        for split in 0..(SAH_BUCKETS - 1) {
            let (mut n0, mut n1) = (0usize, 0usize);
            let (mut b0, mut b1) = (AABB::default(), AABB::default());
            for (b, bucket) in buckets.iter().enumerate() {
                if bucket.0 == 0 {
                    continue;
                }
                if b <= split {
                    n0 += bucket.0;
                    b0.expand_by_aabb(&bucket.1);
                } else {
                    n1 += bucket.0;
                    b1.expand_by_aabb(&bucket.1);
                }
            }
            let c0 = if n0 > 0 { n0 as Float * b0.surface_area() } else { 0.0 };
            let c1 = if n1 > 0 { n1 as Float * b1.surface_area() } else { 0.0 };
            let cost = 1.0 + (c0 + c1) / area;
            if cost < best.0 {
                best = (cost, split);
            }
        }

        if best.0 >= count as Float {
            return self.push_leaf(bounds, start, end);
        }

        let mut mid = start;
        for i in start..end {
            let idx = self.indices[i];
            if self.bucket_of(idx, axis, axis_min, axis_max) <= best.1 {
                self.indices.swap(i, mid);
                mid += 1;
            }
        }
        if mid == start || mid == end {
            return self.push_leaf(bounds, start, end);
        }

        let node_idx = self.push_leaf(bounds, 0, 0);
        let left = self.build(start, mid);
        let right = self.build(mid, end);
        self.nodes[node_idx] = BVHNode::Interior { bounds, left, right };
        node_idx
    }
}

#[cfg(test)]
mod tests {
    use super::BVH;
    use crate::core::shape::Shape;
    use crate::math::constants::{Float, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::shapes::triangle::Triangle;

    fn build_triangles() -> Vec<Triangle> {
        let mut tris = Vec::new();
        for i in 0..32 {
            let x = (i % 8) as Float * 2.0;
            let z = -((i / 8) as Float);
            tris.push(Triangle::new(Vector3f::new(x, 0.0, z),
                                    Vector3f::new(x + 0.5, 0.0, z),
                                    Vector3f::new(x, 0.5, z)));
        }
        tris
    }

    fn closest(bvh: &BVH, triangles: &[Triangle], ray: &Ray3f) -> Option<(usize, Float)> {
        bvh.ray_intersection(ray, |prim_idx, ray| {
            triangles[prim_idx].ray_intersection(ray).map(|h| (h.t(), h.t()))
        })
    }

    #[test]
    fn test_bvh_vs_naive_triangles() {
        let triangles = build_triangles();
        let bvh = BVH::new(triangles.iter().map(|t| t.bounding_box()).collect());
        assert!(bvh.node_count() > 1);

        for i in 0..8 {
            let origin = Vector3f::new(i as Float * 2.0 + 0.1, 0.1, 1.0);
            let ray = Ray3f::new(origin, Vector3f::new(0.0, 0.0, -1.0), None, None);

            let (idx, t) = closest(&bvh, &triangles, &ray).expect("BVH miss");
            assert_eq!(idx, i);
            assert!((t - 1.0).abs() < 1e-5);
        }

        let miss_ray = Ray3f::new(Vector3f::new(100.0, 100.0, 1.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(closest(&bvh, &triangles, &miss_ray).is_none());
    }

    #[test]
    fn test_empty_bvh() {
        let bvh = BVH::new(Vec::new());
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(bvh.ray_intersection(&ray, |_, _| Some(((), 1.0))).is_none());
    }
}
