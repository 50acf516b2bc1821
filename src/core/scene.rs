// Copyright @glimmer authors 2026

use crate::core::error::RenderError;
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f};
use crate::sensors::window::WindowCamera;

use std::sync::Arc;

/// Color written for rays that hit nothing.
pub fn background_color() -> Vector3f {
    Vector3f::new(30.0, 30.0, 40.0)
}

pub struct SceneObject {
    shape: Arc<dyn Shape>,
    color: Vector3f,
    roughness: Float,
}

impl SceneObject {
    /// Color components are RGB in [0, 255]. Roughness must lie in [0, 1];
    /// it is stored for future specular/diffuse blending and not consumed
    /// by the current shading model.
    pub fn new(
        shape: Arc<dyn Shape>,
        color: Vector3f,
        roughness: Float,
    ) -> Result<Self, RenderError> {
        if !(0.0..=1.0).contains(&roughness) {
            return Err(RenderError::InvalidParameter("roughness"));
        }
        Ok(Self {
            shape,
            color,
            roughness,
        })
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    pub fn color(&self) -> Vector3f {
        self.color
    }

    pub fn roughness(&self) -> Float {
        self.roughness
    }
}

/// Light source represented just by a position. Illumination is binary
/// visibility times the cosine term; there is no color or falloff model.
pub struct PointLight {
    position: Vector3f,
}

impl PointLight {
    pub fn new(position: Vector3f) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }
}

/// Camera, objects and lights. Immutable once built; rendering is a pure
/// function of the scene and a resolution, so workers only ever share
/// references into it.
pub struct Scene {
    camera: WindowCamera,
    objects: Vec<SceneObject>,
    lights: Vec<PointLight>,
}

impl Scene {
    pub fn new(camera: WindowCamera, objects: Vec<SceneObject>, lights: Vec<PointLight>) -> Self {
        Self {
            camera,
            objects,
            lights,
        }
    }

    pub fn camera(&self) -> &WindowCamera {
        &self.camera
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }
}
