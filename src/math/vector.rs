// Copyright @glimmer authors 2025

use super::constants::{DEGENERATE_TOLERANCE, Float, Vector3f};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    DegenerateVector,
    InterpolationOutOfRange,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DegenerateVector => write!(f, "degenerate vector"),
            MathError::InterpolationOutOfRange => {
                write!(f, "interpolation factor outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Normalize a vector, failing instead of dividing by a near-zero magnitude.
pub fn unit(v: &Vector3f) -> Result<Vector3f, MathError> {
    let magnitude = v.norm();
    if magnitude < DEGENERATE_TOLERANCE {
        return Err(MathError::DegenerateVector);
    }
    Ok(v / magnitude)
}

/// Projection of `source` onto `onto`: dot(a, b) / |b|^2 * b.
pub fn proj(source: &Vector3f, onto: &Vector3f) -> Result<Vector3f, MathError> {
    let onto_squared = onto.norm_squared();
    if onto_squared < DEGENERATE_TOLERANCE * DEGENERATE_TOLERANCE {
        return Err(MathError::DegenerateVector);
    }
    Ok(onto * (source.dot(onto) / onto_squared))
}

/// Reflect `source` around the axis `axis`: 2 * proj(a, b) - a.
pub fn reflect_around(source: &Vector3f, axis: &Vector3f) -> Result<Vector3f, MathError> {
    Ok(proj(source, axis)? * 2.0 - source)
}

/// Linear interpolation a * (1 - k) + b * k for k in [0, 1].
pub fn lerp(a: &Vector3f, b: &Vector3f, k: Float) -> Result<Vector3f, MathError> {
    if !(0.0..=1.0).contains(&k) {
        return Err(MathError::InterpolationOutOfRange);
    }
    Ok(a * (1.0 - k) + b * k)
}
