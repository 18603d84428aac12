// Copyright 2020 TwoCookingMice

use patchlab::core::command::{parse_key_script, Command};
use patchlab::core::picking::PickScene;
use patchlab::core::rng::LcgRng;
use patchlab::io::args::{print_controls, print_usage, CommonArgs};
use patchlab::io::config::load_optional_config;
use patchlab::io::image_utils::write_image;
use patchlab::renderers::renderer::Renderer;
use patchlab::renderers::shaded::{Light, ShadedRenderer, Shading};
use patchlab::sensors::orbit::OrbitSettings;
use patchlab::shapes::triangle_mesh::TriangleMesh;

use std::env;

const CONTROLS: [(&str, &str); 7] = [
    ("click", "pick an object, it gets a random color"),
    ("arrows", "orbit the camera"),
    ("w s", "zoom in / out"),
    ("r", "reset the view"),
    ("a", "toggle anti-aliasing"),
    ("p", "print object colors"),
    ("q esc", "quit"),
];

const PICK_FLAGS: [(&str, &str); 3] = [
    ("--click X,Y", "pick at window pixel, repeatable"),
    ("--object FILE", "OBJ mesh used as the third object"),
    ("--seed N", "seed of the recoloring generator"),
];

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = CommonArgs::parse(&raw);
    if args.help {
        print_usage("pick_scene", &PICK_FLAGS);
        return;
    }

    let config = match load_optional_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load session config: {}.", e);
            std::process::exit(1);
        }
    };

    let third = match &args.object {
        Some(path) => match TriangleMesh::from_obj(path) {
            Ok(mesh) => Some(mesh),
            Err(e) => {
                log::error!("Failed to load object {}: {}.", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let width = args.width.or(config.width).unwrap_or(900);
    let height = args.height.or(config.height).unwrap_or(700);
    let rng = match args.seed {
        Some(seed) => LcgRng::new(seed),
        None => LcgRng::from_time(),
    };
    let mut scene = PickScene::new(third, config.orbit_settings(OrbitSettings::pick_scene()), width, height, rng);
    if let Some(antialias) = config.antialias {
        scene.state.antialiasing = antialias;
        scene.state.blending = antialias;
    }

    print_controls("Pick scene controls", &CONTROLS);

    for key in parse_key_script(&args.keys) {
        if let Some(command) = Command::from_pick_key(key) {
            if !scene.apply(command) {
                break;
            }
        }
    }

    for (x, y) in &args.clicks {
        scene.pick_at(*x, *y);
    }

    let output = match &args.output {
        Some(output) => output,
        None => return,
    };

    let shading = Shading {
        lighting: scene.state.lighting,
        flat: !scene.state.smooth_shading,
        antialias: scene.state.antialiasing,
        light: config.light.map(Light::Point).unwrap_or(Light::Headlight),
        ..Shading::default()
    };
    let sensor = scene.camera.sensor(scene.width(), scene.height());
    let image = ShadedRenderer::new(shading).render(scene.scene(), &sensor);

    if let Err(e) = write_image(&image, output) {
        log::error!("Failed to write image: {}.", e);
        std::process::exit(1);
    }
}
