// Copyright @glimmer authors 2026

use super::constants::{Float, Vector3f};
use crate::core::rng::LcgRng;

/// Uniform random vector in the unit hemisphere around `normal`, by
/// rejection from the unit cube. The result is not normalized. Candidates
/// outside the unit ball or pointing away from the normal are discarded.
pub fn random_in_hemisphere(rng: &mut LcgRng, normal: &Vector3f) -> Vector3f {
    loop {
        let candidate = Vector3f::new(
            rng.next_symmetric_f32(),
            rng.next_symmetric_f32(),
            rng.next_symmetric_f32(),
        );
        if candidate.norm_squared() > 1.0 {
            continue;
        }
        if candidate.dot(normal) < 0.0 {
            continue;
        }
        return candidate;
    }
}

/// Uniform random point on the unit disk, by rejection from the unit square.
pub fn random_on_unit_disk(rng: &mut LcgRng) -> (Float, Float) {
    loop {
        let x = rng.next_symmetric_f32();
        let y = rng.next_symmetric_f32();
        if x * x + y * y > 1.0 {
            continue;
        }
        return (x, y);
    }
}
