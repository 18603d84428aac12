// Copyright @yucwang 2026

use crate::core::bvh::BVH;
use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::math::aabb::AABB;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Arc<dyn Shape>,
    pub color: Vector3f,
    pub name: Option<String>,
}

impl SceneObject {
    pub fn new(shape: Arc<dyn Shape>, color: Vector3f) -> Self {
        Self { shape, color, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("object")
    }
}

pub struct Scene {
    objects: Vec<SceneObject>,
    scene_bounds: AABB,
    bvh: Option<BVH>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            scene_bounds: AABB::default(),
            bvh: None,
        }
    }

    pub fn with_objects(objects: Vec<SceneObject>) -> Self {
        let mut scene = Self { objects, scene_bounds: AABB::default(), bvh: None };
        scene.build_bvh();
        scene
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
        self.bvh = None;
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    /// Colors may change freely; replacing shapes requires `build_bvh`.
    pub fn objects_mut(&mut self) -> &mut Vec<SceneObject> {
        &mut self.objects
    }

    pub fn scene_bounds(&self) -> &AABB {
        &self.scene_bounds
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn build_bvh(&mut self) {
        let mut prim_bounds = Vec::with_capacity(self.objects.len());
        let mut scene_bounds = AABB::default();
        for obj in &self.objects {
            let bounds = obj.shape.bounding_box();
            scene_bounds.expand_by_aabb(&bounds);
            prim_bounds.push(bounds);
        }

        self.bvh = Some(BVH::new(prim_bounds));
        self.scene_bounds = scene_bounds;
    }

    /// Closest hit over all objects, tagged with the object index. Returns
    /// `None` until `build_bvh` has run.
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let bvh = self.bvh.as_ref()?;
        let (idx, hit) = bvh.ray_intersection(ray, |prim_idx, ray| {
            self.objects[prim_idx].shape.ray_intersection(ray).map(|h| {
                let t = h.t();
                (h, t)
            })
        })?;
        Some(hit.with_object_index(Some(idx)))
    }
}
