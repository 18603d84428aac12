// Copyright @yucwang 2026

use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::core::texture::Texture;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::vector::{clamp01, normalize_or_default};

use super::renderer::{for_each_pixel, pixel_samples, Renderer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Point light at the camera eye.
    Headlight,
    Point(Vector3f),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    pub lighting: bool,
    pub flat: bool,
    pub antialias: bool,
    pub light: Light,
    pub ambient: Float,
    pub background: Vector3f,
}

impl Default for Shading {
    fn default() -> Self {
        Self {
            lighting: true,
            flat: false,
            antialias: false,
            light: Light::Headlight,
            ambient: 0.08,
            background: Vector3f::new(0.12, 0.12, 0.12),
        }
    }
}

/// Control net drawn over the frame: grey net lines and point dots, the
/// selected point larger and yellow. `axes` places an RGB axis gizmo.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub points: Vec<Vector3f>,
    pub columns: usize,
    pub selected: Option<usize>,
    pub axes: Option<Vector3f>,
}

const NET_COLOR: [Float; 3] = [0.6, 0.6, 0.6];
const POINT_COLOR: [Float; 3] = [0.9, 0.9, 0.9];
const SELECTED_COLOR: [Float; 3] = [1.0, 1.0, 0.0];
const AXIS_LENGTH: Float = 0.5;

/// Lambert shading of the closest hit, lit by one point light.
pub struct ShadedRenderer<'a> {
    shading: Shading,
    texture: Option<&'a dyn Texture>,
    overlay: Option<Overlay>,
}

impl<'a> ShadedRenderer<'a> {
    pub fn new(shading: Shading) -> Self {
        Self { shading, texture: None, overlay: None }
    }

    /// Modulates object colors by `texture`.
    pub fn with_texture(mut self, texture: Option<&'a dyn Texture>) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_overlay(mut self, overlay: Option<Overlay>) -> Self {
        self.overlay = overlay;
        self
    }

    fn shade(&self, scene: &Scene, sensor: &dyn Sensor, eye: &Vector3f, u: &Vector2f) -> Vector3f {
        let ray = sensor.sample_ray(u);
        let hit = match scene.ray_intersection(&ray) {
            Some(hit) => hit,
            None => return self.shading.background,
        };

        let albedo = hit
            .object_index()
            .and_then(|id| scene.objects().get(id))
            .map(|o| o.color)
            .unwrap_or_else(|| Vector3f::new(1.0, 1.0, 1.0));
        let base = match self.texture {
            Some(texture) => albedo.component_mul(&texture.eval(hit.uv())),
            None => albedo,
        };
        if !self.shading.lighting {
            return clamp01(&base);
        }

        let mut n = if self.shading.flat { hit.geo_normal() } else { hit.sh_normal() };
        // Both sides are lit.
        if n.dot(&ray.dir()) > 0.0 {
            n = -n;
        }
        let light_pos = match self.shading.light {
            Light::Headlight => *eye,
            Light::Point(p) => p,
        };
        let l = normalize_or_default(&(light_pos - hit.p()));
        let diffuse = n.dot(&l).max(0.0);
        clamp01(&(base * diffuse + Vector3f::repeat(self.shading.ambient)))
    }

    fn draw_overlay(&self, image: &mut Bitmap, sensor: &dyn Sensor) {
        let overlay = match &self.overlay {
            Some(overlay) => overlay,
            None => return,
        };
        let projected: Vec<Option<Vector2f>> = overlay.points.iter().map(|p| sensor.project(p)).collect();
        let columns = overlay.columns.max(1);

        for (k, a) in projected.iter().enumerate() {
            let right = if (k + 1) % columns != 0 { projected.get(k + 1) } else { None };
            let below = projected.get(k + columns);
            let neighbours = [right, below];
            for b in neighbours.iter().flatten() {
                if let (Some(a), Some(b)) = (a, *b) {
                    draw_line(image, a, b, Vector3f::from(NET_COLOR));
                }
            }
        }

        if let Some(origin) = overlay.axes {
            for axis in 0..3 {
                let mut dir = Vector3f::zeros();
                dir[axis] = 1.0;
                if let (Some(a), Some(b)) = (sensor.project(&origin), sensor.project(&(origin + dir * AXIS_LENGTH))) {
                    draw_line(image, &a, &b, dir);
                }
            }
        }

        for (k, p) in projected.iter().enumerate() {
            if let Some(p) = p {
                if overlay.selected == Some(k) {
                    draw_dot(image, p, 6.0, Vector3f::from(SELECTED_COLOR));
                } else {
                    draw_dot(image, p, 3.0, Vector3f::from(POINT_COLOR));
                }
            }
        }
    }
}

impl<'a> Renderer for ShadedRenderer<'a> {
    type Output = Bitmap;

    fn render(&self, scene: &Scene, sensor: &dyn Sensor) -> Bitmap {
        let (width, height) = (sensor.width(), sensor.height());
        let mut image = Bitmap::new(width, height);
        if width == 0 || height == 0 {
            return image;
        }
        log::info!("Rendering {} object(s) with {}.", scene.len(), sensor.describe());
        if let Some(texture) = self.texture {
            log::info!("Texture: {}.", texture.describe());
        }

        let eye = sensor.origin();

        for_each_pixel(width, height, |x, y| {
            let samples = pixel_samples(x, y, width, height, self.shading.antialias);
            let sum = samples
                .iter()
                .fold(Vector3f::zeros(), |acc, u| acc + self.shade(scene, sensor, &eye, u));
            image[(x, y)] = sum / samples.len() as Float;
        });

        self.draw_overlay(&mut image, sensor);
        image
    }
}

fn draw_dot(image: &mut Bitmap, center: &Vector2f, radius: Float, color: Vector3f) {
    let x0 = (center.x - radius).floor().max(0.0) as usize;
    let y0 = (center.y - radius).floor().max(0.0) as usize;
    let x1 = ((center.x + radius).ceil().max(0.0) as usize).min(image.width());
    let y1 = ((center.y + radius).ceil().max(0.0) as usize).min(image.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let d = Vector2f::new(x as Float + 0.5, y as Float + 0.5) - center;
            if d.norm() <= radius {
                image[(x, y)] = color;
            }
        }
    }
}

fn draw_line(image: &mut Bitmap, a: &Vector2f, b: &Vector2f, color: Vector3f) {
    let steps = (b - a).abs().max().ceil().max(1.0).min(10_000.0) as usize;
    for i in 0..=steps {
        let p = a + (b - a) * (i as Float / steps as Float);
        if p.x >= 0.0 && p.y >= 0.0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < image.width() && y < image.height() {
                image[(x, y)] = color;
            }
        }
    }
}
