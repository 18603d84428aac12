// Copyright @yucwang 2026

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::math::constants::{Float, Vector3f};
use crate::sensors::orbit::OrbitSettings;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {}", err),
            ConfigError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Session overrides read from XML. Every field is optional; `None` keeps
/// the binary's default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    pub points_file: Option<PathBuf>,
    pub resolution: Option<u32>,
    pub distance: Option<Float>,
    pub azimuth: Option<Float>,
    pub elevation: Option<Float>,
    pub fov: Option<Float>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub flat_shading: Option<bool>,
    pub texture: Option<bool>,
    pub antialias: Option<bool>,
    pub overlay: Option<bool>,
    pub light: Option<Vector3f>,
}

impl SessionConfig {
    /// Camera settings with the configured pose applied on top of `base`.
    pub fn orbit_settings(&self, base: OrbitSettings) -> OrbitSettings {
        OrbitSettings {
            distance: self.distance.unwrap_or(base.distance),
            azimuth: self.azimuth.unwrap_or(base.azimuth),
            elevation: self.elevation.unwrap_or(base.elevation),
            fov_y: self.fov.unwrap_or(base.fov_y),
            ..base
        }
    }
}

/// Loads a session file; a relative patch file is resolved against the
/// directory of the session file.
pub fn load_session_config<P: AsRef<Path>>(path: P) -> Result<SessionConfig, ConfigError> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path)?;
    let mut config = parse_session_config(&xml)?;
    if let Some(points) = config.points_file.take() {
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        config.points_file = Some(if points.is_relative() { base_dir.join(points) } else { points });
    }
    log::info!("Session config loaded from: {}.", path.display());
    Ok(config)
}

/// `load_session_config` when a path is given, the default config otherwise.
pub fn load_optional_config(path: Option<&Path>) -> Result<SessionConfig, ConfigError> {
    match path {
        Some(path) => load_session_config(path),
        None => Ok(SessionConfig::default()),
    }
}

pub fn parse_session_config(xml: &str) -> Result<SessionConfig, ConfigError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut config = SessionConfig::default();
    let mut light = [None, None, None];

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.name().as_ref().to_vec();
                for attr in e.attributes().flatten() {
                    let value = attr.unescape_value().unwrap_or_default().to_string();
                    match (name.as_slice(), attr.key.as_ref()) {
                        (b"patch", b"file") => config.points_file = Some(PathBuf::from(value)),
                        (b"patch", b"resolution") => config.resolution = Some(parse_u32(&value)?),
                        (b"camera", b"distance") => config.distance = Some(parse_float(&value)?),
                        (b"camera", b"azimuth") => config.azimuth = Some(parse_float(&value)?),
                        (b"camera", b"elevation") => config.elevation = Some(parse_float(&value)?),
                        (b"camera", b"fov") => config.fov = Some(parse_float(&value)?),
                        (b"film", b"width") => config.width = Some(parse_usize(&value)?),
                        (b"film", b"height") => config.height = Some(parse_usize(&value)?),
                        (b"shading", b"mode") => config.flat_shading = Some(parse_shading_mode(&value)?),
                        (b"shading", b"texture") => config.texture = Some(parse_bool(&value)?),
                        (b"shading", b"antialias") => config.antialias = Some(parse_bool(&value)?),
                        (b"shading", b"overlay") => config.overlay = Some(parse_bool(&value)?),
                        (b"light", b"x") => light[0] = Some(parse_float(&value)?),
                        (b"light", b"y") => light[1] = Some(parse_float(&value)?),
                        (b"light", b"z") => light[2] = Some(parse_float(&value)?),
                        (b"session", _) | (b"patch", _) | (b"camera", _) | (b"film", _)
                        | (b"shading", _) | (b"light", _) => {
                            log::warn!("Ignoring unknown attribute: {}.", String::from_utf8_lossy(attr.key.as_ref()));
                        }
                        _ => {}
                    }
                }
                match name.as_slice() {
                    b"session" | b"patch" | b"camera" | b"film" | b"shading" | b"light" => {}
                    other => log::warn!("Ignoring unknown element: <{}>.", String::from_utf8_lossy(other)),
                }
            }
            Err(e) => {
                return Err(ConfigError::Parse(e.to_string()));
            }
            _ => {}
        }

        buf.clear();
    }

    if light.iter().any(Option::is_some) {
        config.light = Some(Vector3f::new(light[0].unwrap_or(0.0),
                                          light[1].unwrap_or(0.0),
                                          light[2].unwrap_or(0.0)));
    }

    Ok(config)
}

fn parse_float(value: &str) -> Result<Float, ConfigError> {
    value.trim().parse::<Float>().map_err(|_| ConfigError::Parse(format!("invalid float: {}", value)))
}

fn parse_u32(value: &str) -> Result<u32, ConfigError> {
    value.trim().parse::<u32>().map_err(|_| ConfigError::Parse(format!("invalid integer: {}", value)))
}

fn parse_usize(value: &str) -> Result<usize, ConfigError> {
    value.trim().parse::<usize>().map_err(|_| ConfigError::Parse(format!("invalid integer: {}", value)))
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        other => Err(ConfigError::Parse(format!("invalid boolean: {}", other))),
    }
}

/// `true` for flat shading.
fn parse_shading_mode(value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "flat" => Ok(true),
        "smooth" => Ok(false),
        other => Err(ConfigError::Parse(format!("invalid shading mode: {}", other))),
    }
}
