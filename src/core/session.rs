// Copyright @yucwang 2026

use crate::core::command::Command;
use crate::core::control_grid::{ControlGrid, POINT_COUNT};
use crate::core::tessellation::{clamp_resolution, PatchMesh, DEFAULT_RESOLUTION};
use crate::math::constants::{Float, Vector3f};
use crate::sensors::orbit::{OrbitCamera, OrbitSettings};

/// Distance a control point moves per key press.
pub const TRANSLATE_STEP: Float = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub flat_shading: bool,
    pub texture: bool,
    pub antialias: bool,
    pub overlay: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { flat_shading: true, texture: false, antialias: false, overlay: true }
    }
}

/// How `+` and `-` change the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPolicy {
    pub step: u32,
    pub min: u32,
    pub max: u32,
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self { step: 1, min: 1, max: 100 }
    }
}

impl ResolutionPolicy {
    /// Steps of two sample points between 4 and 50 samples per side.
    pub fn coarse() -> Self {
        Self { step: 2, min: 3, max: 49 }
    }

    fn clamp(&self, resolution: u32) -> u32 {
        clamp_resolution(resolution.max(self.min).min(self.max))
    }
}

/// Editable patch: control grid, selection, camera and the current mesh.
/// The mesh and the centroid are rebuilt after every geometric change.
pub struct PatchSession {
    grid: ControlGrid,
    selected: usize,
    resolution: u32,
    policy: ResolutionPolicy,
    mesh: PatchMesh,
    centroid: Vector3f,
    pub camera: OrbitCamera,
    pub options: RenderOptions,
}

impl PatchSession {
    pub fn new(grid: ControlGrid, resolution: u32, settings: OrbitSettings) -> Self {
        Self::with_policy(grid, resolution, settings, ResolutionPolicy::default())
    }

    pub fn with_policy(grid: ControlGrid,
                       resolution: u32,
                       settings: OrbitSettings,
                       policy: ResolutionPolicy) -> Self {
        let resolution = policy.clamp(resolution);
        let mut session = Self {
            grid,
            selected: 0,
            resolution,
            policy,
            mesh: PatchMesh::build(&grid, resolution),
            centroid: grid.centroid(),
            camera: OrbitCamera::new(settings),
            options: RenderOptions::default(),
        };
        session.camera.target = session.centroid;
        session
    }

    pub fn grid(&self) -> &ControlGrid {
        &self.grid
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn mesh(&self) -> &PatchMesh {
        &self.mesh
    }

    pub fn centroid(&self) -> Vector3f {
        self.centroid
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(POINT_COUNT - 1);
    }

    /// Moves the selected point and rebuilds.
    pub fn translate_selected(&mut self, delta: &Vector3f) {
        self.grid.translate(self.selected, delta);
        self.rebuild();
    }

    pub fn set_resolution(&mut self, resolution: u32) {
        self.resolution = self.policy.clamp(resolution);
        self.rebuild();
    }

    /// Retessellates and moves the camera target to the new centroid.
    pub fn rebuild(&mut self) {
        self.centroid = self.grid.centroid();
        self.camera.target = self.centroid;
        self.mesh = PatchMesh::build(&self.grid, self.resolution);
    }

    /// Applies one command. Returns `false` once the session should stop.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Select(index) => {
                self.select(index);
                log::info!("Selected control point {}.", self.selected);
            }
            Command::SelectPrevious => {
                self.select((self.selected + POINT_COUNT - 1) % POINT_COUNT);
            }
            Command::SelectNext => {
                self.select((self.selected + 1) % POINT_COUNT);
            }
            Command::Translate { axis, direction } => {
                let mut delta = Vector3f::zeros();
                delta[axis.min(2)] = direction * TRANSLATE_STEP;
                self.translate_selected(&delta);
            }
            Command::IncreaseResolution => {
                self.set_resolution(self.resolution + self.policy.step);
                log::info!("Resolution: {}.", self.resolution);
            }
            Command::DecreaseResolution => {
                self.set_resolution(self.resolution.saturating_sub(self.policy.step));
                log::info!("Resolution: {}.", self.resolution);
            }
            Command::Zoom(steps) => self.camera.zoom(steps),
            Command::Orbit { azimuth, elevation } => self.camera.rotate(azimuth, elevation),
            Command::ResetView => {
                self.camera.reset();
                self.rebuild();
            }
            Command::ToggleTexture => {
                self.options.texture = !self.options.texture;
                log::info!("Texture {}.", if self.options.texture { "ON" } else { "OFF" });
            }
            Command::ToggleShading => {
                self.options.flat_shading = !self.options.flat_shading;
                log::info!("Shading: {}.", if self.options.flat_shading { "flat" } else { "smooth" });
            }
            Command::ToggleAntialias => {
                self.options.antialias = !self.options.antialias;
                log::info!("Anti-aliasing {}.", if self.options.antialias { "ON" } else { "OFF" });
            }
            Command::PrintControlPoints => print!("{}", self.grid),
            Command::PrintColors => {}
            Command::Quit => return false,
        }
        true
    }
}

impl Default for PatchSession {
    fn default() -> Self {
        Self::new(ControlGrid::default(), DEFAULT_RESOLUTION, OrbitSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::{parse_key_script, Command};

    fn run(session: &mut PatchSession, script: &str) -> bool {
        parse_key_script(script)
            .into_iter()
            .filter_map(Command::from_editor_key)
            .all(|cmd| session.apply(cmd))
    }

    #[test]
    fn test_translate_selected_point_only() {
        let mut session = PatchSession::default();
        let before = *session.grid();
        assert!(run(&mut session, "5l"));

        assert_eq!(session.selected(), 5);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if (i, j) == (1, 1) {
                    before.get(i, j) + Vector3f::new(TRANSLATE_STEP, 0.0, 0.0)
                } else {
                    before.get(i, j)
                };
                assert_eq!(session.grid().get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_resolution_scenario() {
        let mut session = PatchSession::default();
        assert_eq!(session.mesh().triangle_count(), 200);
        run(&mut session, "+");
        assert_eq!(session.resolution(), 11);
        assert_eq!(session.mesh().triangle_count(), 242);

        session.set_resolution(1);
        run(&mut session, "--");
        assert_eq!(session.resolution(), 1);
        session.set_resolution(100);
        run(&mut session, "+");
        assert_eq!(session.resolution(), 100);
    }

    #[test]
    fn test_coarse_policy_steps_by_two() {
        let mut session = PatchSession::with_policy(ControlGrid::default(), 11, OrbitSettings::default(),
                                                    ResolutionPolicy::coarse());
        run(&mut session, "+");
        assert_eq!(session.resolution(), 13);
        session.set_resolution(0);
        assert_eq!(session.resolution(), 3);
        session.set_resolution(1000);
        assert_eq!(session.resolution(), 49);
    }

    #[test]
    fn test_selection_cycles() {
        let mut session = PatchSession::default();
        run(&mut session, "[");
        assert_eq!(session.selected(), 15);
        run(&mut session, "]]");
        assert_eq!(session.selected(), 1);
        run(&mut session, "f]");
        assert_eq!(session.selected(), 0);
    }

    #[test]
    fn test_camera_target_follows_centroid() {
        let mut session = PatchSession::default();
        assert!((session.camera.target.z - 0.375).abs() < 1e-6);
        // Raise point 0 by 16 steps: the centroid gains 0.05.
        run(&mut session, "0uuuuuuuuuuuuuuuu");
        assert!((session.centroid().z - 0.425).abs() < 1e-5);
        assert_eq!(session.camera.target, session.centroid());
    }

    #[test]
    fn test_reset_restores_pose() {
        let mut session = PatchSession::default();
        run(&mut session, "<left><left><up>ww");
        assert_eq!(session.camera.azimuth, 37.0);
        run(&mut session, "r");
        assert_eq!(session.camera.azimuth, 45.0);
        assert_eq!(session.camera.elevation, 20.0);
        assert_eq!(session.camera.distance, 6.0);
        assert_eq!(session.camera.target, session.centroid());
    }

    #[test]
    fn test_quit_stops_script() {
        let mut session = PatchSession::default();
        assert!(!run(&mut session, "tq5"));
        assert!(session.options.texture);
        assert_eq!(session.selected(), 0);
    }
}
