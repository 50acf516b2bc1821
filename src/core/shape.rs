// Copyright @glimmer authors 2026

use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::vector::MathError;

/// Geometric primitive that can be placed in a scene.
pub trait Shape: Send + Sync {
    /// Smallest ray parameter within the ray's [min_t, max_t] at which the
    /// ray meets this shape, or None if it misses.
    fn intersect(&self, ray: &Ray3f) -> Option<Float>;

    /// Unit outward normal for a point. Points off the surface are allowed;
    /// implementations project them onto the surface.
    fn normal_at(&self, p: &Vector3f) -> Result<Vector3f, MathError>;

    fn describe(&self) -> String {
        String::from("Shape")
    }
}
