// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::command::Command;
use crate::core::rng::LcgRng;
use crate::core::scene::{Scene, SceneObject};
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f};
use crate::math::transform::Transform;
use crate::renderers::pick::PickRenderer;
use crate::renderers::renderer::Renderer;
use crate::sensors::orbit::{OrbitCamera, OrbitSettings};
use crate::shapes::primitives;
use crate::shapes::triangle_mesh::TriangleMesh;

pub type PickColor = [u8; 3];

pub const BACKGROUND_COLOR: PickColor = [0, 0, 0];
pub const DEFAULT_PICK_COLORS: [PickColor; 3] = [[10, 20, 30], [40, 50, 60], [70, 80, 90]];

/// Identifier colors, one per pickable object, plus the clear color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickTable {
    colors: Vec<PickColor>,
    background: PickColor,
}

impl Default for PickTable {
    fn default() -> Self {
        Self::new(DEFAULT_PICK_COLORS.to_vec(), BACKGROUND_COLOR)
    }
}

impl PickTable {
    pub fn new(colors: Vec<PickColor>, background: PickColor) -> Self {
        Self { colors, background }
    }

    pub fn background(&self) -> PickColor {
        self.background
    }

    pub fn color(&self, object: usize) -> Option<PickColor> {
        self.colors.get(object).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Object whose identifier matches `pixel` exactly. The background and
    /// unknown colors resolve to `None`.
    pub fn resolve(&self, pixel: PickColor) -> Option<usize> {
        if pixel == self.background {
            return None;
        }
        self.colors.iter().position(|c| *c == pixel)
    }
}

/// RGB8 framebuffer with row 0 at the bottom.
#[derive(Debug, Clone)]
pub struct PickBuffer {
    width: usize,
    height: usize,
    data: Vec<PickColor>,
}

impl PickBuffer {
    pub fn new(width: usize, height: usize, clear: PickColor) -> Self {
        Self { width, height, data: vec![clear; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: PickColor) {
        for p in self.data.iter_mut() {
            *p = color;
        }
    }

    /// `row` counts from the bottom.
    pub fn set(&mut self, x: usize, row: usize, color: PickColor) {
        if x < self.width && row < self.height {
            self.data[x + self.width * row] = color;
        }
    }

    pub fn get(&self, x: usize, row: usize) -> Option<PickColor> {
        if x < self.width && row < self.height {
            Some(self.data[x + self.width * row])
        } else {
            None
        }
    }

    /// Reads the pixel under window coordinates (top-left origin).
    pub fn read_window_pixel(&self, x: usize, y: usize) -> Option<PickColor> {
        if y >= self.height {
            return None;
        }
        self.get(x, self.height - 1 - y)
    }
}

/// Fixed-function switches that perturb exact colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub lighting: bool,
    pub smooth_shading: bool,
    pub dithering: bool,
    pub antialiasing: bool,
    pub blending: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self { lighting: true, smooth_shading: true, dithering: true, antialiasing: true, blending: true }
    }
}

impl RenderState {
    pub fn pick_pass() -> Self {
        Self { lighting: false, smooth_shading: false, dithering: false, antialiasing: false, blending: false }
    }

    /// Switches to the pick pass and returns the state to restore afterwards.
    pub fn enter_pick_pass(&mut self) -> RenderState {
        let saved = *self;
        *self = Self::pick_pass();
        saved
    }

    pub fn restore(&mut self, saved: RenderState) {
        *self = saved;
    }
}

pub const DEFAULT_OBJECT_COLORS: [[Float; 3]; 3] = [[0.8, 0.2, 0.2], [0.2, 0.8, 0.2], [0.2, 0.2, 0.8]];
const OBJECT_OFFSETS: [Float; 3] = [-2.2, 0.0, 2.2];

/// Placement of object `id`: tilted -20 degrees about X, then turned
/// `id * 30` degrees about Y, then moved along X.
pub fn object_transform(id: usize) -> Transform {
    let offset = OBJECT_OFFSETS.get(id).copied().unwrap_or(0.0);
    Transform::translate(Vector3f::new(offset, 0.0, 0.0))
        .then(&Transform::rotate_x(-20.0))
        .then(&Transform::rotate_y(id as Float * 30.0))
}

/// Three-object scene edited by picking.
pub struct PickScene {
    scene: Scene,
    table: PickTable,
    pub state: RenderState,
    pub camera: OrbitCamera,
    width: usize,
    height: usize,
    rng: LcgRng,
}

impl PickScene {
    /// Sphere, torus and `third` (a cube when `None`).
    pub fn new(third: Option<TriangleMesh>,
               settings: OrbitSettings,
               width: usize,
               height: usize,
               rng: LcgRng) -> Self {
        let meshes = vec![
            primitives::uv_sphere(0.9, 48, 48),
            primitives::torus(0.25, 0.85, 48, 48),
            third.unwrap_or_else(|| primitives::cube_mesh(0.6)),
        ];
        let names = ["sphere", "torus", "third"];

        let objects = meshes
            .into_iter()
            .enumerate()
            .map(|(id, mut mesh)| {
                mesh.apply_transform(&object_transform(id));
                let c = DEFAULT_OBJECT_COLORS[id];
                let shape: Arc<dyn Shape> = Arc::new(mesh);
                SceneObject::new(shape, Vector3f::new(c[0], c[1], c[2])).with_name(names[id].to_string())
            })
            .collect();

        Self {
            scene: Scene::with_objects(objects),
            table: PickTable::default(),
            state: RenderState::default(),
            camera: OrbitCamera::new(settings),
            width: width.max(1),
            height: height.max(1),
            rng,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn table(&self) -> &PickTable {
        &self.table
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self, id: usize) -> Option<Vector3f> {
        self.scene.objects().get(id).map(|o| o.color)
    }

    /// Renders the identifier pass with the pick state in force, then
    /// restores the previous state.
    pub fn render_pick_buffer(&mut self) -> PickBuffer {
        let saved = self.state.enter_pick_pass();
        let sensor = self.camera.sensor(self.width, self.height);
        let buffer = PickRenderer::new(&self.table, self.state).render(&self.scene, &sensor);
        self.state.restore(saved);
        buffer
    }

    /// Object under window pixel `(x, y)`, top-left origin. A hit gives the
    /// object a new random display color.
    pub fn pick_at(&mut self, x: usize, y: usize) -> Option<usize> {
        let buffer = self.render_pick_buffer();
        let pixel = buffer.read_window_pixel(x, y).unwrap_or(self.table.background());
        log::info!("Picked color = ({}, {}, {}).", pixel[0], pixel[1], pixel[2]);

        match self.table.resolve(pixel) {
            Some(id) => {
                let color = self.rng.next_color();
                if let Some(object) = self.scene.objects_mut().get_mut(id) {
                    object.color = color;
                    log::info!("Picked object {} ({}) new color = ({:.3}, {:.3}, {:.3}).",
                               id, object.label(), color.x, color.y, color.z);
                }
                Some(id)
            }
            None => {
                log::info!("No object picked (background).");
                None
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Zoom(steps) => self.camera.zoom(steps),
            Command::Orbit { azimuth, elevation } => self.camera.rotate(azimuth, elevation),
            Command::ResetView => {
                self.camera.reset();
                self.camera.target = Vector3f::zeros();
            }
            Command::ToggleAntialias => {
                self.state.antialiasing = !self.state.antialiasing;
                self.state.blending = self.state.antialiasing;
                log::info!("Anti-aliasing {}.", if self.state.antialiasing { "ON" } else { "OFF" });
            }
            Command::PrintColors => {
                for (id, object) in self.scene.objects().iter().enumerate() {
                    println!("obj {} color = {:.3}, {:.3}, {:.3}", id, object.color.x, object.color.y, object.color.z);
                }
            }
            Command::Quit => return false,
            _ => {}
        }
        true
    }
}
