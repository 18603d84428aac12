// Copyright 2020 @TwoCookingMice

pub mod aabb;
pub mod bernstein;
pub mod bitmap;
pub mod constants;
pub mod ray;
pub mod transform;
pub mod vector;
