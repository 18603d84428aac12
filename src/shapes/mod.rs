// Copyright @yucwang 2026

pub mod primitives;
pub mod triangle;
pub mod triangle_mesh;
