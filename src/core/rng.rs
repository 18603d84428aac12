// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};

/// 64-bit linear congruential generator.
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeded from the wall clock, for sessions without an explicit seed.
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }

    /// Three independent uniform channels in [0, 1].
    pub fn next_color(&mut self) -> Vector3f {
        let r = self.next_f32();
        let g = self.next_f32();
        let b = self.next_f32();
        Vector3f::new(r, g, b)
    }
}
