// Copyright 2020 TwoCookingMice

use patchlab::core::command::{parse_key_script, Command};
use patchlab::core::scene::{Scene, SceneObject};
use patchlab::core::session::PatchSession;
use patchlab::core::texture::Texture;
use patchlab::core::tessellation::DEFAULT_RESOLUTION;
use patchlab::io::args::{print_controls, print_usage, CommonArgs};
use patchlab::io::config::load_optional_config;
use patchlab::io::control_points::{load_control_points, DEFAULT_POINTS_FILE};
use patchlab::io::image_utils::write_image;
use patchlab::io::obj_utils::write_patch_obj;
use patchlab::math::constants::Vector3f;
use patchlab::renderers::renderer::Renderer;
use patchlab::renderers::shaded::{Light, Overlay, ShadedRenderer, Shading};
use patchlab::sensors::orbit::OrbitSettings;
use patchlab::shapes::triangle_mesh::TriangleMesh;
use patchlab::textures::gradient::GradientTexture;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

const CONTROLS: [(&str, &str); 13] = [
    ("0-9 a-f", "select control point"),
    ("[ ]", "previous / next control point"),
    ("j l", "move point along -x / +x"),
    ("k i", "move point along -y / +y"),
    ("o u", "move point along -z / +z"),
    ("+ -", "increase / decrease resolution"),
    ("arrows", "orbit the camera"),
    ("w s", "zoom in / out"),
    ("r", "reset the view"),
    ("t", "toggle texture"),
    ("n", "toggle flat / smooth shading"),
    ("p", "print control points"),
    ("q esc", "quit"),
];

const EDITOR_FLAGS: [(&str, &str); 2] = [
    ("--resolution N", "initial tessellation resolution"),
    ("--export-obj FILE", "write the final mesh as Wavefront OBJ"),
];

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = CommonArgs::parse(&raw);
    if args.help {
        print_usage("patchlab", &EDITOR_FLAGS);
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
    let resolution = args.resolution.or(config.resolution).unwrap_or(DEFAULT_RESOLUTION);

    let mut session = PatchSession::new(grid, resolution, config.orbit_settings(OrbitSettings::default()));
    session.options.flat_shading = config.flat_shading.unwrap_or(session.options.flat_shading);
    session.options.texture = config.texture.unwrap_or(session.options.texture);
    session.options.antialias = config.antialias.unwrap_or(session.options.antialias);
    session.options.overlay = config.overlay.unwrap_or(session.options.overlay);

    print_controls("Patch editor controls", &CONTROLS);

    for key in parse_key_script(&args.keys) {
        if let Some(command) = Command::from_editor_key(key) {
            if !session.apply(command) {
                break;
            }
        }
    }

    if let Some(path) = &args.export_obj {
        match write_patch_obj(session.mesh(), path) {
            Ok(()) => log::info!("Mesh exported to: {}.", path.display()),
            Err(e) => {
                log::error!("Failed to export mesh: {}.", e);
                std::process::exit(1);
            }
        }
    }

    let output = match &args.output {
        Some(output) => output,
        None => return,
    };

    let width = args.width.or(config.width).unwrap_or(900);
    let height = args.height.or(config.height).unwrap_or(700);
    let mesh = TriangleMesh::from_patch(session.mesh());
    let scene = Scene::with_objects(vec![
        SceneObject::new(Arc::new(mesh), Vector3f::new(0.7, 0.5, 0.2)).with_name("patch".to_string()),
    ]);

    let shading = Shading {
        flat: session.options.flat_shading,
        antialias: session.options.antialias,
        light: config.light.map(Light::Point).unwrap_or(Light::Headlight),
        ..Shading::default()
    };
    let gradient = GradientTexture::default();
    let texture = if session.options.texture { Some(&gradient as &dyn Texture) } else { None };
    let overlay = if session.options.overlay {
        Some(Overlay {
            points: session.grid().row_major(),
            columns: 4,
            selected: Some(session.selected()),
            axes: Some(session.centroid()),
        })
    } else {
        None
    };

    let sensor = session.camera.sensor(width, height);
    let image = ShadedRenderer::new(shading)
        .with_texture(texture)
        .with_overlay(overlay)
        .render(&scene, &sensor);

    if let Err(e) = write_image(&image, output) {
        log::error!("Failed to write image: {}.", e);
        std::process::exit(1);
    }
}
