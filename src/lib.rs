// Copyright @glimmer authors 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

pub mod core;
pub mod io;
pub mod math;
pub mod renderers;
pub mod sensors;
pub mod shapes;

use crate::core::error::RenderError;
use crate::core::scene::Scene;
use crate::renderers::simple::{Renderer, SimpleRenderer};

/// Capture a scene at the given resolution and serialize it as a text
/// pixel map. `resolution_x` is the number of pixel rows, `resolution_y`
/// the number of columns.
pub fn render_to_pnm(
    scene: &Scene,
    resolution_x: usize,
    resolution_y: usize,
) -> Result<Vec<u8>, RenderError> {
    let renderer = SimpleRenderer::new(resolution_x, resolution_y);
    let bitmap = renderer.render(scene)?;
    Ok(io::pnm_utils::encode_pnm(&bitmap).into_bytes())
}
