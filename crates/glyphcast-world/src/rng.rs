//! Explicitly seeded PRNG for world generation.
//!
//! 64-bit LCG (Knuth MMIX constants), high bits taken as output.
//! Identical seeds give identical sequences on every platform.

const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

/// Deterministic generator used by terrain and structure passes.
#[derive(Debug, Clone)]
pub struct GenRng {
    state: u64,
}

impl GenRng {
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: seed };
        // Discard the first output so small seeds don't start near zero.
        rng.next_u32();
        rng
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        (self.state >> 33) as u32
    }

    /// Uniform integer in `[min, max]` inclusive. Returns `min` if `max < min`.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + (self.next_u32() as u64 % span) as i64) as i32
    }

    /// Uniform float in `[min, max)`.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        // 31 output bits -> [0, 1)
        let unit = self.next_u32() as f32 / (1u64 << 31) as f32;
        min + (max - min) * unit.min(1.0 - f32::EPSILON)
    }
}
