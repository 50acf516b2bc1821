// Copyright @glimmer authors 2026

use crate::core::error::RenderError;
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::vector::{unit, MathError};

pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Result<Self, RenderError> {
        if radius <= 0.0 {
            return Err(RenderError::InvalidParameter("radius"));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Shape for Sphere {
    /// Entry/exit points via the quadratic |P + t*V - C|^2 = r^2:
    /// a = |V|^2, b = 2 * dot(P - C, V), c = |P - C|^2 - r^2.
    /// Returns the smaller root inside the ray interval. A zero direction
    /// (a = 0) is ruled out by the `Ray3f` constructor.
    fn intersect(&self, ray: &Ray3f) -> Option<Float> {
        let oc = ray.origin() - self.center;
        let dir = ray.dir();

        let a = dir.norm_squared();
        let b = 2.0 * oc.dot(&dir);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t_near = (-b - sqrt_discriminant) / (2.0 * a);
        let t_far = (-b + sqrt_discriminant) / (2.0 * a);

        if ray.test_segment(t_near) {
            Some(t_near)
        } else if ray.test_segment(t_far) {
            Some(t_far)
        } else {
            None
        }
    }

    /// Points off the surface are projected radially onto it, so this is
    /// valid for the approximate hit point of a marched ray.
    fn normal_at(&self, p: &Vector3f) -> Result<Vector3f, MathError> {
        unit(&(p - self.center))
    }

    fn describe(&self) -> String {
        format!(
            "Sphere {{ center: ({}, {}, {}), radius: {} }}",
            self.center.x, self.center.y, self.center.z, self.radius
        )
    }
}
