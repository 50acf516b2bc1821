// Copyright @glimmer authors 2026

use crate::core::error::RenderError;
use crate::core::scene::{background_color, Scene};
use crate::math::bitmap::Bitmap;
use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::vector::unit;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

const BLOCK_SIZE: usize = 64;

/// Ray caster over a fixed output resolution. `resolution_x` counts pixel
/// rows (top to bottom), `resolution_y` pixel columns (left to right).
///
/// The scene is read-only during rendering and every pixel is independent,
/// so the frame is cut into blocks handed out to scoped worker threads
/// through a shared counter; finished blocks come back over a channel.
pub struct SimpleRenderer {
    resolution_x: usize,
    resolution_y: usize,
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene) -> Result<Bitmap, RenderError> {
        if self.resolution_x == 0 {
            return Err(RenderError::InvalidParameter("resolution_x"));
        }
        if self.resolution_y == 0 {
            return Err(RenderError::InvalidParameter("resolution_y"));
        }

        let height = self.resolution_x;
        let width = self.resolution_y;

        // nothing to intersect, skip the per-pixel work entirely
        if scene.objects().is_empty() {
            return Ok(Bitmap::filled(width, height, background_color()));
        }

        let blocks_x = (width + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let blocks_y = (height + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let total_blocks = blocks_x * blocks_y;

        let progress = ProgressBar::new(total_blocks as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_block = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let (tx, rx) = mpsc::channel::<(usize, usize, usize, usize, Vec<Vector3f>)>();
        let mut output = Bitmap::new(width, height);

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_block = Arc::clone(&next_block);
                let tx = tx.clone();
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let bx = block_index % blocks_x;
                        let by = block_index / blocks_x;
                        let x0 = bx * BLOCK_SIZE;
                        let y0 = by * BLOCK_SIZE;
                        let x1 = (x0 + BLOCK_SIZE).min(width);
                        let y1 = (y0 + BLOCK_SIZE).min(height);

                        let mut block = vec![Vector3f::zeros(); (x1 - x0) * (y1 - y0)];
                        for y in y0..y1 {
                            for x in x0..x1 {
                                block[(x - x0) + (x1 - x0) * (y - y0)] = self.shade(scene, y, x);
                            }
                        }
                        if tx.send((x0, y0, x1, y1, block)).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for _ in 0..total_blocks {
                if let Ok((x0, y0, x1, y1, block)) = rx.recv() {
                    for y in y0..y1 {
                        for x in x0..x1 {
                            output[(x, y)] = block[(x - x0) + (x1 - x0) * (y - y0)];
                        }
                    }
                    progress.inc(1);
                }
            }
        });
        progress.finish_and_clear();
        Ok(output)
    }
}

impl SimpleRenderer {
    pub fn new(resolution_x: usize, resolution_y: usize) -> Self {
        Self {
            resolution_x,
            resolution_y,
        }
    }

    /// Color of pixel (i, j): nearest hit over all objects, then one shadow
    /// ray per light. Ties in the nearest-hit search keep the earlier
    /// object in list order.
    fn shade(&self, scene: &Scene, i: usize, j: usize) -> Vector3f {
        let ray = match scene
            .camera()
            .primary_ray(i, j, self.resolution_x, self.resolution_y)
        {
            Ok(ray) => ray,
            Err(_) => return background_color(),
        };

        let mut nearest: Option<(usize, Float)> = None;
        for (index, object) in scene.objects().iter().enumerate() {
            if let Some(t) = object.shape().intersect(&ray) {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((index, t));
                }
            }
        }

        let (hit_index, hit_t) = match nearest {
            Some(hit) => hit,
            None => return background_color(),
        };

        let hit_object = &scene.objects()[hit_index];
        let hit_point = ray.at(hit_t);
        let normal = match hit_object.shape().normal_at(&hit_point) {
            Ok(normal) => normal,
            Err(_) => return background_color(),
        };

        let lights = scene.lights();
        if lights.is_empty() {
            // illumination defined as zero rather than dividing by zero
            return hit_object.color() * 0.0;
        }

        let mut total_illumination: Float = 0.0;
        for light in lights {
            let to_light = light.position() - hit_point;
            if Self::occluded(scene, hit_index, &hit_point, &to_light) {
                continue;
            }
            let light_dir = match unit(&to_light) {
                Ok(dir) => dir,
                // light sits on the surface point, nothing to contribute
                Err(_) => continue,
            };
            total_illumination += normal.dot(&light_dir).max(0.0);
        }
        let illumination = total_illumination / lights.len() as Float;

        hit_object.color() * illumination
    }

    /// Whether any object other than the hit one blocks the segment from
    /// `point` to the light. The ray direction is the full segment, so the
    /// light is reached at exactly t = 1; the hit object is excluded by
    /// its index, not by comparing values.
    fn occluded(scene: &Scene, hit_index: usize, point: &Vector3f, to_light: &Vector3f) -> bool {
        let shadow_ray = match Ray3f::new(*point, *to_light, Some(EPSILON), Some(1.0)) {
            Ok(ray) => ray,
            Err(_) => return false,
        };
        for (index, object) in scene.objects().iter().enumerate() {
            if index == hit_index {
                continue;
            }
            if object.shape().intersect(&shadow_ray).is_some() {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{PointLight, SceneObject};
    use crate::sensors::window::WindowCamera;
    use crate::shapes::sphere::Sphere;

    fn test_camera() -> WindowCamera {
        WindowCamera::new(
            Vector3f::new(0.0, 0.0, 5.0),
            1.0,
            1.0,
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            1.0,
        )
        .unwrap()
    }

    fn sphere_object(center: Vector3f, radius: Float, color: Vector3f) -> SceneObject {
        SceneObject::new(
            std::sync::Arc::new(Sphere::new(center, radius).unwrap()),
            color,
            0.5,
        )
        .unwrap()
    }

    // The 9x9 center pixel of `test_camera` fires along direction
    // (2, -2, -1) from the eye; a unit sphere at (4, -4, 3) is hit at
    // (10/3, -10/3, 10/3) with normal (-2/3, 2/3, 1/3).
    const HIT_POINT: (Float, Float, Float) = (10.0 / 3.0, -10.0 / 3.0, 10.0 / 3.0);

    fn target_sphere(color: Vector3f) -> SceneObject {
        sphere_object(Vector3f::new(4.0, -4.0, 3.0), 1.0, color)
    }

    fn center_pixel(bitmap: &Bitmap) -> Vector3f {
        // Bitmap is indexed (column, row)
        bitmap[(4, 4)]
    }

    #[test]
    fn test_empty_scene_is_background_only() {
        let scene = Scene::new(test_camera(), Vec::new(), Vec::new());
        let renderer = SimpleRenderer::new(4, 5);
        let bitmap = renderer.render(&scene).unwrap();

        assert_eq!(bitmap.height(), 4);
        assert_eq!(bitmap.width(), 5);
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(bitmap[(x, y)], background_color());
            }
        }
    }

    #[test]
    fn test_zero_resolution_is_rejected() {
        let scene = Scene::new(test_camera(), Vec::new(), Vec::new());
        assert!(SimpleRenderer::new(0, 5).render(&scene).is_err());
        assert!(SimpleRenderer::new(5, 0).render(&scene).is_err());
    }

    #[test]
    fn test_full_illumination_when_light_faces_surface() {
        let color = Vector3f::new(200.0, 100.0, 50.0);
        // light along the surface normal from the hit point: cosine is 1
        let light = PointLight::new(Vector3f::new(
            HIT_POINT.0 - 2.0,
            HIT_POINT.1 + 2.0,
            HIT_POINT.2 + 1.0,
        ));
        let scene = Scene::new(test_camera(), vec![target_sphere(color)], vec![light]);
        let bitmap = SimpleRenderer::new(9, 9).render(&scene).unwrap();

        let pixel = center_pixel(&bitmap);
        assert!((pixel - color).norm() < 1e-2);
    }

    #[test]
    fn test_partial_illumination_at_oblique_angle() {
        let color = Vector3f::new(90.0, 90.0, 90.0);
        // light offset along -x from the hit point: cosine is 2/3
        let light = PointLight::new(Vector3f::new(HIT_POINT.0 - 3.0, HIT_POINT.1, HIT_POINT.2));
        let scene = Scene::new(test_camera(), vec![target_sphere(color)], vec![light]);
        let bitmap = SimpleRenderer::new(9, 9).render(&scene).unwrap();

        let pixel = center_pixel(&bitmap);
        assert!((pixel - color * (2.0 / 3.0)).norm() < 1e-2);
    }

    #[test]
    fn test_occluder_drives_illumination_to_zero() {
        let color = Vector3f::new(90.0, 90.0, 90.0);
        let light = PointLight::new(Vector3f::new(HIT_POINT.0 - 3.0, HIT_POINT.1, HIT_POINT.2));
        // small sphere halfway along the shadow segment
        let occluder = sphere_object(
            Vector3f::new(HIT_POINT.0 - 1.5, HIT_POINT.1, HIT_POINT.2),
            0.5,
            Vector3f::new(1.0, 1.0, 1.0),
        );
        let scene = Scene::new(
            test_camera(),
            vec![target_sphere(color), occluder],
            vec![light],
        );
        let bitmap = SimpleRenderer::new(9, 9).render(&scene).unwrap();

        let pixel = center_pixel(&bitmap);
        assert!(pixel.norm() < 1e-3);

        // far corner pixel misses everything in both setups
        assert_eq!(bitmap[(8, 0)], background_color());
    }

    #[test]
    fn test_zero_lights_yield_black_silhouette() {
        let color = Vector3f::new(200.0, 100.0, 50.0);
        let scene = Scene::new(test_camera(), vec![target_sphere(color)], Vec::new());
        let bitmap = SimpleRenderer::new(9, 9).render(&scene).unwrap();

        let pixel = center_pixel(&bitmap);
        assert_eq!(pixel, Vector3f::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_nearest_object_wins() {
        let near_color = Vector3f::new(10.0, 200.0, 10.0);
        let far_color = Vector3f::new(200.0, 10.0, 10.0);
        // both spheres centered on the center-pixel ray, light at the eye side
        let near = sphere_object(Vector3f::new(2.0, -2.0, 4.0), 0.2, near_color);
        let far = sphere_object(Vector3f::new(4.0, -4.0, 3.0), 1.0, far_color);
        let light = PointLight::new(Vector3f::new(0.0, 0.0, 5.0));
        let scene = Scene::new(test_camera(), vec![far, near], vec![light]);
        let bitmap = SimpleRenderer::new(9, 9).render(&scene).unwrap();

        let pixel = center_pixel(&bitmap);
        // the near sphere faces the light head on through the eye
        assert!((pixel - near_color).norm() < 1.0);
    }
}
