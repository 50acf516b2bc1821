// Copyright @glimmer authors 2026

use crate::math::constants::Float;

/// Seedable linear congruential generator. Sampling code takes this
/// explicitly so results are reproducible from a seed.
pub struct LcgRng {
    state: u64,
}

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state >> 32) as u32
    }

    /// Uniform in [0, 1].
    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }

    /// Uniform in [-1, 1].
    pub fn next_symmetric_f32(&mut self) -> Float {
        2.0 * self.next_f32() - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = LcgRng::new(42);
        let mut b = LcgRng::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_next_f32_in_unit_interval() {
        let mut rng = LcgRng::new(7);
        for _ in 0..256 {
            let v = rng.next_f32();
            assert!(v >= 0.0 && v <= 1.0);
        }
    }

    #[test]
    fn test_next_symmetric_f32_in_range() {
        let mut rng = LcgRng::new(7);
        for _ in 0..256 {
            let v = rng.next_symmetric_f32();
            assert!(v >= -1.0 && v <= 1.0);
        }
    }
}
