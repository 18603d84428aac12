// Copyright @yucwang 2021

pub mod pick;
pub mod renderer;
pub mod shaded;
