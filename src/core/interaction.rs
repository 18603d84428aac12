// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector2f, Vector3f };

#[derive(Debug, Clone, Copy)]
pub struct SurfaceIntersection {
    p: Vector3f,
    geo_normal: Vector3f,
    sh_normal:  Vector3f,
    uv: Vector2f,
    t: Float,
    tri_index: Option<usize>,
    obj_index: Option<usize>,
}

impl SurfaceIntersection {
    pub fn new(new_p: Vector3f,
               new_geo_normal: Vector3f,
               new_sh_normal: Vector3f,
               new_uv: Vector2f,
               new_t: Float) -> Self {
        Self { p: new_p, geo_normal: new_geo_normal, sh_normal: new_sh_normal,
               uv: new_uv, t: new_t, tri_index: None, obj_index: None }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn uv(&self) -> Vector2f {
        self.uv
    }

    pub fn geo_normal(&self) -> Vector3f {
        self.geo_normal
    }

    pub fn sh_normal(&self) -> Vector3f {
        self.sh_normal
    }

    pub fn triangle_index(&self) -> Option<usize> {
        self.tri_index
    }

    pub fn with_triangle_index(mut self, tri_index: Option<usize>) -> Self {
        self.tri_index = tri_index;
        self
    }

    pub fn object_index(&self) -> Option<usize> {
        self.obj_index
    }

    pub fn with_object_index(mut self, obj_index: Option<usize>) -> Self {
        self.obj_index = obj_index;
        self
    }
}
