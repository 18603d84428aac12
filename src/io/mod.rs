// Copyright @yucwang 2026

pub mod args;
pub mod config;
pub mod control_points;
pub mod image_utils;
pub mod obj_utils;
