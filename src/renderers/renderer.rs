// Copyright @glimmer authors 2026

use crate::core::error::RenderError;
use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;

pub trait Renderer {
    fn render(&self, scene: &Scene) -> Result<Bitmap, RenderError>;
}
