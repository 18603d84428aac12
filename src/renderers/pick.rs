// Copyright @yucwang 2026

use crate::core::picking::{PickBuffer, PickColor, PickTable, RenderState};
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::Float;

use super::renderer::{for_each_pixel, pixel_samples, Renderer};

/// Renders every object in its flat identifier color into a pick buffer.
pub struct PickRenderer<'a> {
    table: &'a PickTable,
    state: RenderState,
}

impl<'a> PickRenderer<'a> {
    pub fn new(table: &'a PickTable, state: RenderState) -> Self {
        if state != RenderState::pick_pass() {
            log::warn!("Pick pass running with {:?}; identifier colors may be perturbed.", state);
        }
        Self { table, state }
    }

    fn sample(&self, scene: &Scene, sensor: &dyn Sensor, x: usize, y: usize) -> PickColor {
        let samples = pixel_samples(x, y, sensor.width(), sensor.height(), self.state.antialiasing);
        let mut sum = [0.0 as Float; 3];
        for u in &samples {
            let color = scene
                .ray_intersection(&sensor.sample_ray(u))
                .and_then(|hit| hit.object_index())
                .and_then(|id| self.table.color(id))
                .unwrap_or(self.table.background());
            for k in 0..3 {
                sum[k] += color[k] as Float;
            }
        }
        // Averaging only happens with supersampling, which blends edges.
        let n = samples.len() as Float;
        [(sum[0] / n).round() as u8, (sum[1] / n).round() as u8, (sum[2] / n).round() as u8]
    }
}

impl<'a> Renderer for PickRenderer<'a> {
    type Output = PickBuffer;

    fn render(&self, scene: &Scene, sensor: &dyn Sensor) -> PickBuffer {
        let (width, height) = (sensor.width(), sensor.height());
        let mut buffer = PickBuffer::new(width, height, self.table.background());
        log::debug!("Pick pass: {}.", sensor.describe());

        for_each_pixel(width, height, |x, y| {
            buffer.set(x, height - 1 - y, self.sample(scene, sensor, x, y));
        });
        buffer
    }
}
