// Copyright @yucwang 2021

pub mod bvh;
pub mod command;
pub mod control_grid;
pub mod interaction;
pub mod patch;
pub mod picking;
pub mod rng;
pub mod scene;
pub mod sensor;
pub mod session;
pub mod shape;
pub mod tessellation;
pub mod texture;
