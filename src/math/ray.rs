// Copyright @glimmer authors 2025

use super::constants::{Float, Vector3f};
use super::vector::MathError;

/// Half-line origin + t * dir over [min_t, max_t].
///
/// The direction is kept exactly as given. Shadow rays rely on this: a ray
/// toward a light with dir = light - origin reaches the light at t = 1.
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float,
}

impl Ray3f {
    pub fn new(
        o: Vector3f,
        d: Vector3f,
        min_t: Option<Float>,
        max_t: Option<Float>,
    ) -> Result<Self, MathError> {
        if d.norm_squared() == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(Self {
            origin: o,
            dir: d,
            min_t: min_t.unwrap_or(0.0),
            max_t: max_t.unwrap_or(Float::INFINITY),
        })
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}

/* Tests for Ray */
