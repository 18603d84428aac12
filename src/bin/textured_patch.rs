// Copyright 2020 TwoCookingMice

use patchlab::core::command::{parse_key_script, Command};
use patchlab::core::scene::{Scene, SceneObject};
use patchlab::core::session::{PatchSession, ResolutionPolicy};
use patchlab::core::texture::Texture;
use patchlab::io::args::{print_controls, print_usage, CommonArgs};
use patchlab::io::config::load_optional_config;
use patchlab::io::control_points::{load_control_points, DEFAULT_POINTS_FILE};
use patchlab::io::image_utils::write_image;
use patchlab::math::constants::Vector3f;
use patchlab::renderers::renderer::Renderer;
use patchlab::renderers::shaded::{Light, ShadedRenderer, Shading};
use patchlab::sensors::orbit::OrbitSettings;
use patchlab::shapes::triangle_mesh::TriangleMesh;
use patchlab::textures::gradient::GradientTexture;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Twelve sample points per side.
const DEFAULT_CELLS: u32 = 11;

const CONTROLS: [(&str, &str); 6] = [
    ("t", "toggle texture"),
    ("+ -", "more / fewer sample points"),
    ("arrows", "orbit the camera"),
    ("w s", "zoom in / out"),
    ("r", "reset the view"),
    ("q esc", "quit"),
];

const TEXTURED_FLAGS: [(&str, &str); 1] = [("--resolution N", "initial number of cells per side")];

fn viewer_command(command: Command) -> Option<Command> {
    match command {
        Command::ToggleTexture
        | Command::IncreaseResolution
        | Command::DecreaseResolution
        | Command::Zoom(_)
        | Command::Orbit { .. }
        | Command::ResetView
        | Command::PrintControlPoints
        | Command::Quit => Some(command),
        _ => None,
    }
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = CommonArgs::parse(&raw);
    if args.help {
        print_usage("textured_patch", &TEXTURED_FLAGS);
        return;
    }

    let config = match load_optional_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load session config: {}.", e);
            std::process::exit(1);
        }
    };

    let points_path = args
        .points
        .clone()
        .or_else(|| config.points_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_POINTS_FILE));
    let grid = load_control_points(&points_path);
    let resolution = args.resolution.or(config.resolution).unwrap_or(DEFAULT_CELLS);

    let base = OrbitSettings { turn_step: 5.0, zoom_step: 0.3, min_distance: 0.5, ..OrbitSettings::default() };
    let mut session = PatchSession::with_policy(grid, resolution, config.orbit_settings(base),
                                                ResolutionPolicy::coarse());
    session.options.texture = config.texture.unwrap_or(true);
    session.options.flat_shading = config.flat_shading.unwrap_or(false);
    session.options.antialias = config.antialias.unwrap_or(false);

    print_controls("Textured patch controls", &CONTROLS);

    for key in parse_key_script(&args.keys) {
        if let Some(command) = Command::from_editor_key(key).and_then(viewer_command) {
            if !session.apply(command) {
                break;
            }
        }
    }

    let output = match &args.output {
        Some(output) => output,
        None => return,
    };

    let width = args.width.or(config.width).unwrap_or(1000);
    let height = args.height.or(config.height).unwrap_or(700);
    let mesh = TriangleMesh::from_patch(session.mesh());
    let scene = Scene::with_objects(vec![
        SceneObject::new(Arc::new(mesh), Vector3f::repeat(0.7)).with_name("patch".to_string()),
    ]);

    let shading = Shading {
        flat: session.options.flat_shading,
        antialias: session.options.antialias,
        light: Light::Point(config.light.unwrap_or_else(|| Vector3f::new(5.0, 5.0, 5.0))),
        ambient: 0.2,
        ..Shading::default()
    };
    let gradient = GradientTexture::default();
    let texture = if session.options.texture { Some(&gradient as &dyn Texture) } else { None };

    let sensor = session.camera.sensor(width, height);
    let image = ShadedRenderer::new(shading).with_texture(texture).render(&scene, &sensor);

    if let Err(e) = write_image(&image, output) {
        log::error!("Failed to write image: {}.", e);
        std::process::exit(1);
    }
}
