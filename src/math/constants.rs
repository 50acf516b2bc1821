/* Copyright @glimmer authors 2025 */

pub type Float = f32;

pub type Vector3f = nalgebra::Vector3<Float>;

/// Lower bound for ray intervals, keeps a surface from re-hitting itself.
pub const EPSILON: Float = 1e-4;

/// Below this magnitude a vector cannot be normalized.
pub const DEGENERATE_TOLERANCE: Float = 1e-9;
