// Copyright @glimmer authors 2026

use glimmer::core::error::RenderError;
use glimmer::core::scene::{PointLight, Scene, SceneObject};
use glimmer::io::{png_utils, pnm_utils};
use glimmer::math::constants::Vector3f;
use glimmer::renderers::simple::{Renderer, SimpleRenderer};
use glimmer::sensors::window::WindowCamera;
use glimmer::shapes::sphere::Sphere;

use std::env;
use std::sync::Arc;

fn sphere_object(
    center: Vector3f,
    radius: f32,
    color: Vector3f,
    roughness: f32,
) -> Result<SceneObject, RenderError> {
    SceneObject::new(Arc::new(Sphere::new(center, radius)?), color, roughness)
}

// Row of spheres around the origin over a huge ground sphere, camera a few
// units out on the x-axis looking slightly downward.
fn build_demo_scene() -> Result<Scene, RenderError> {
    let camera = WindowCamera::new(
        Vector3f::new(5.0, 0.0, 1.0),
        1.0,
        1.0,
        Vector3f::new(-1.0, 0.0, -0.1),
        Vector3f::new(-0.1, 0.0, 1.0),
        1.0,
    )?;

    let objects = vec![
        sphere_object(
            Vector3f::new(0.0, 2.0, 0.0),
            1.0,
            Vector3f::new(240.0, 50.0, 31.0),
            1.0,
        )?,
        sphere_object(
            Vector3f::new(0.0, 0.0, 0.0),
            1.0,
            Vector3f::new(31.0, 240.0, 33.0),
            0.0,
        )?,
        sphere_object(
            Vector3f::new(0.0, -2.0, 0.0),
            1.0,
            Vector3f::new(45.0, 31.0, 240.0),
            1.0,
        )?,
        sphere_object(
            Vector3f::new(0.0, -4.0, 0.0),
            1.0,
            Vector3f::new(240.0, 31.0, 219.0),
            0.2,
        )?,
        sphere_object(
            Vector3f::new(0.0, 4.0, 0.0),
            1.0,
            Vector3f::new(240.0, 31.0, 219.0),
            0.8,
        )?,
        sphere_object(
            Vector3f::new(0.0, 0.0, -10000.0),
            9999.0,
            Vector3f::new(129.0, 72.0, 176.0),
            1.0,
        )?,
    ];

    let lights = vec![
        PointLight::new(Vector3f::new(5.0, -2.0, 4.0)),
        PointLight::new(Vector3f::new(5.0, 1.0, 4.0)),
    ];

    Ok(Scene::new(camera, objects, lights))
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <output.pmm> [--res-x N] [--res-y N] [--png PATH]",
            args[0]
        );
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut resolution_x: usize = 1000;
    let mut resolution_y: usize = 1000;
    let mut png_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--res-x" => {
                i += 1;
                resolution_x = args
                    .get(i)
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(resolution_x);
            }
            "--res-y" => {
                i += 1;
                resolution_y = args
                    .get(i)
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(resolution_y);
            }
            "--png" => {
                i += 1;
                png_path = args.get(i).cloned();
            }
            _ => {}
        }
        i += 1;
    }

    let scene = build_demo_scene().expect("failed to build scene");
    log::info!("{}", scene.camera().describe());
    for object in scene.objects() {
        log::info!("{}", object.shape().describe());
    }
    log::info!(
        "Rendering {} x {} pixels with {} lights.",
        resolution_x,
        resolution_y,
        scene.lights().len()
    );

    let renderer = SimpleRenderer::new(resolution_x, resolution_y);
    let bitmap = renderer.render(&scene).expect("render failed");

    pnm_utils::write_pnm_to_file(&bitmap, output_path).expect("failed to write pnm image");
    if let Some(path) = png_path {
        png_utils::write_png_to_file(&bitmap, &path).expect("failed to write png image");
    }
}
