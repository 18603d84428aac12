// Copyright 2020 @TwoCookingMice

use super::constants::Vector3f;

use std::ops;

/// Linear RGB image, row 0 at the top.
#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<Vector3f>,
    width: usize,
    height: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector3f;

    fn index(&self, index: (usize, usize)) -> &Vector3f {
        assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![Vector3f::zeros(); width * height],
               width,
               height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill(&mut self, color: Vector3f) {
        for p in self.data.iter_mut() {
            *p = color;
        }
    }

    /// 8-bit RGB bytes, rows top to bottom.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for c in &self.data {
            for k in 0..3 {
                out.push((c[k].max(0.0).min(1.0) * 255.0 + 0.5) as u8);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(256, 128);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 128);

        bitmap[(5, 6)] = Vector3f::new(1.0, 0.5, 0.6);
        assert_eq!(bitmap[(5, 6)].x, 1.0);
        assert_eq!(bitmap[(2, 6)].x, 0.0);
    }

    #[test]
    fn test_bitmap_to_rgb8_clamps() {
        let mut bitmap = Bitmap::new(2, 1);
        bitmap.fill(Vector3f::new(0.5, 2.0, -1.0));
        let bytes = bitmap.to_rgb8();
        assert_eq!(bytes, vec![128, 255, 0, 128, 255, 0]);
    }
}
