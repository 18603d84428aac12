// Copyright @yucwang 2021

use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f};

use indicatif::{ProgressBar, ProgressStyle};

pub trait Renderer {
    type Output;

    fn render(&self, scene: &Scene, sensor: &dyn Sensor) -> Self::Output;
}

/// Film positions in [0, 1]^2 of the samples inside pixel `(x, y)`: the
/// pixel center, or a 2x2 grid when `supersample` is set.
pub fn pixel_samples(x: usize, y: usize, width: usize, height: usize, supersample: bool) -> Vec<Vector2f> {
    let offsets: &[(Float, Float)] = if supersample {
        &[(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)]
    } else {
        &[(0.5, 0.5)]
    };
    offsets
        .iter()
        .map(|(dx, dy)| Vector2f::new((x as Float + dx) / width as Float,
                                      (y as Float + dy) / height as Float))
        .collect()
}

/// Runs `shade` over every pixel, top row first, reporting progress per row.
pub fn for_each_pixel<F>(width: usize, height: usize, mut shade: F)
where
    F: FnMut(usize, usize),
{
    let progress = ProgressBar::new(height as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for y in 0..height {
        for x in 0..width {
            shade(x, y);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
}
