// Copyright @yucwang 2026

use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f, Vector3f};

use image::{Rgb, RgbImage};

pub const DEFAULT_GRADIENT_SIZE: u32 = 256;

/// Procedural RGB gradient: red follows u, green follows v, blue is the
/// complement of red. Texel row 0 sits at v = 0. Sampled bilinearly with
/// clamped coordinates.
pub struct GradientTexture {
    image: RgbImage,
}

impl GradientTexture {
    pub fn new(size: u32) -> Self {
        let size = size.max(2);
        let inv = 1.0 / (size - 1) as Float;
        let image = RgbImage::from_fn(size, size, |i, j| {
            let u = i as Float * inv;
            let v = j as Float * inv;
            Rgb([(255.0 * u) as u8, (255.0 * v) as u8, (255.0 * (1.0 - u)) as u8])
        });
        Self { image }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    fn texel(&self, x: i64, y: i64) -> Vector3f {
        let max = self.image.width() as i64 - 1;
        let p = self.image.get_pixel(x.max(0).min(max) as u32, y.max(0).min(max) as u32);
        Vector3f::new(p[0] as Float, p[1] as Float, p[2] as Float) / 255.0
    }
}

impl Default for GradientTexture {
    fn default() -> Self {
        Self::new(DEFAULT_GRADIENT_SIZE)
    }
}

impl Texture for GradientTexture {
    fn eval(&self, uv: Vector2f) -> Vector3f {
        let size = self.image.width() as Float;
        let x = uv.x.max(0.0).min(1.0) * size - 0.5;
        let y = uv.y.max(0.0).min(1.0) * size - 0.5;

        let x0 = x.floor();
        let y0 = y.floor();
        let tx = x - x0;
        let ty = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let c0 = self.texel(x0, y0) * (1.0 - tx) + self.texel(x0 + 1, y0) * tx;
        let c1 = self.texel(x0, y0 + 1) * (1.0 - tx) + self.texel(x0 + 1, y0 + 1) * tx;
        c0 * (1.0 - ty) + c1 * ty
    }

    fn describe(&self) -> String {
        format!("GradientTexture[{}x{}]", self.image.width(), self.image.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texel_values() {
        let tex = GradientTexture::default();
        assert_eq!(tex.image().get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(tex.image().get_pixel(255, 0).0, [255, 0, 0]);
        assert_eq!(tex.image().get_pixel(0, 255).0, [0, 255, 255]);
    }

    #[test]
    fn test_corners_and_clamping() {
        let tex = GradientTexture::default();
        let c = tex.eval(Vector2f::new(0.0, 0.0));
        assert!((c - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);

        let outside = tex.eval(Vector2f::new(1.5, -2.0));
        assert!((outside - Vector3f::new(1.0, 0.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_bilinear_midpoint() {
        let tex = GradientTexture::new(2);
        let c = tex.eval(Vector2f::new(0.5, 0.5));
        assert!((c.x - 0.5).abs() < 0.01);
        assert!((c.y - 0.5).abs() < 0.01);
        assert!((c.z - 0.5).abs() < 0.01);
    }
}
