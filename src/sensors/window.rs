// Copyright @glimmer authors 2026

use crate::core::error::RenderError;
use crate::math::constants::{DEGENERATE_TOLERANCE, EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::vector::{unit, MathError};

/// Pinhole camera over a rectangular window in world space.
///
/// The window sizes are half-extents: the window spans two window sizes in
/// each direction. `window_size_x` runs along the up axis (pixel rows, top
/// to bottom) and `window_size_y` along the right axis (pixel columns,
/// left to right).
pub struct WindowCamera {
    eye_position: Vector3f,
    window_size_x: Float,
    window_size_y: Float,
    window_distance: Float,
    view_unit: Vector3f,
    right_unit: Vector3f,
    up_unit: Vector3f,
    top_left: Vector3f,
}

impl WindowCamera {
    /// Derives the orthonormal viewing basis by Gram-Schmidt-style
    /// orthogonalization: view from the viewing direction, right from
    /// view x orientation, up from right x view. Fails on non-positive
    /// window parameters, degenerate input vectors, or an orientation
    /// hint parallel to the viewing direction.
    pub fn new(
        eye_position: Vector3f,
        window_size_x: Float,
        window_size_y: Float,
        viewing_direction: Vector3f,
        orientation_vector: Vector3f,
        window_distance: Float,
    ) -> Result<Self, RenderError> {
        if window_size_x <= 0.0 {
            return Err(RenderError::InvalidParameter("window_size_x"));
        }
        if window_size_y <= 0.0 {
            return Err(RenderError::InvalidParameter("window_size_y"));
        }
        if window_distance <= 0.0 {
            return Err(RenderError::InvalidParameter("window_distance"));
        }

        let view_unit = unit(&viewing_direction)?;
        unit(&orientation_vector)?;

        let cross = view_unit.cross(&orientation_vector);
        if cross.norm() < DEGENERATE_TOLERANCE {
            return Err(RenderError::ParallelOrientation);
        }
        let right_unit = unit(&cross)?;
        // unit already: right is perpendicular to view and both are unit
        let up_unit = right_unit.cross(&view_unit);

        let center_of_window = eye_position + view_unit * window_distance;
        let top_left = center_of_window - up_unit * window_size_x + right_unit * window_size_y;

        Ok(Self {
            eye_position,
            window_size_x,
            window_size_y,
            window_distance,
            view_unit,
            right_unit,
            up_unit,
            top_left,
        })
    }

    /// World-space center of pixel (i, j) at the given resolution, with i
    /// indexing rows top to bottom and j columns left to right:
    /// top_left - (i + 0.5) * 2 * (window_size_x / resolution_x) * up
    ///          + (j + 0.5) * 2 * (window_size_y / resolution_y) * right.
    pub fn pixel_center(
        &self,
        i: usize,
        j: usize,
        resolution_x: usize,
        resolution_y: usize,
    ) -> Vector3f {
        let pixel_size_x = self.window_size_x / resolution_x as Float;
        let pixel_size_y = self.window_size_y / resolution_y as Float;

        self.top_left - self.up_unit * ((i as Float + 0.5) * 2.0 * pixel_size_x)
            + self.right_unit * ((j as Float + 0.5) * 2.0 * pixel_size_y)
    }

    /// Ray from the eye through the center of pixel (i, j), with the lower
    /// interval bound excluding the eye itself.
    pub fn primary_ray(
        &self,
        i: usize,
        j: usize,
        resolution_x: usize,
        resolution_y: usize,
    ) -> Result<Ray3f, MathError> {
        let pixel = self.pixel_center(i, j, resolution_x, resolution_y);
        Ray3f::new(
            self.eye_position,
            pixel - self.eye_position,
            Some(EPSILON),
            None,
        )
    }

    pub fn eye_position(&self) -> Vector3f {
        self.eye_position
    }

    pub fn view_unit(&self) -> Vector3f {
        self.view_unit
    }

    pub fn right_unit(&self) -> Vector3f {
        self.right_unit
    }

    pub fn up_unit(&self) -> Vector3f {
        self.up_unit
    }

    pub fn top_left(&self) -> Vector3f {
        self.top_left
    }

    pub fn window_distance(&self) -> Float {
        self.window_distance
    }

    pub fn describe(&self) -> String {
        format!(
            "WindowCamera {{ eye: ({}, {}, {}), window: {} x {}, distance: {} }}",
            self.eye_position.x,
            self.eye_position.y,
            self.eye_position.z,
            self.window_size_x,
            self.window_size_y,
            self.window_distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_camera() -> WindowCamera {
        WindowCamera::new(
            Vector3f::new(0.0, 0.0, 0.0),
            1.0,
            1.0,
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_basis_is_right_handed_orthonormal() {
        let camera = axis_camera();
        let view = camera.view_unit();
        let right = camera.right_unit();
        let up = camera.up_unit();

        assert!((view.norm() - 1.0).abs() < 1e-6);
        assert!((right.norm() - 1.0).abs() < 1e-6);
        assert!((up.norm() - 1.0).abs() < 1e-6);
        assert!(view.dot(&right).abs() < 1e-6);
        assert!(view.dot(&up).abs() < 1e-6);
        assert!(right.dot(&up).abs() < 1e-6);

        assert!((right - Vector3f::new(1.0, 0.0, 0.0)).norm() < 1e-6);
        assert!((up - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_basis_handles_unnormalized_inputs() {
        let camera = WindowCamera::new(
            Vector3f::new(0.0, 0.0, 0.0),
            1.0,
            1.0,
            Vector3f::new(0.0, 0.0, -7.5),
            Vector3f::new(0.0, 3.0, 0.0),
            1.0,
        )
        .unwrap();
        assert!((camera.view_unit() - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_window_corner_convention() {
        let camera = axis_camera();
        // center of window (0, 0, -1), minus up plus right
        assert!((camera.top_left() - Vector3f::new(1.0, -1.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_pixel_center_formula() {
        let camera = axis_camera();
        // 2x2 grid, pixel size 0.5 in both axes
        let p00 = camera.pixel_center(0, 0, 2, 2);
        assert!((p00 - Vector3f::new(1.5, -1.5, -1.0)).norm() < 1e-6);

        let p11 = camera.pixel_center(1, 1, 2, 2);
        assert!((p11 - Vector3f::new(2.5, -2.5, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_pixel_centers_lie_on_window_plane() {
        let camera = axis_camera();
        for i in 0..4 {
            for j in 0..4 {
                let pixel = camera.pixel_center(i, j, 4, 4);
                let along_view = (pixel - camera.eye_position()).dot(&camera.view_unit());
                assert!((along_view - camera.window_distance()).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_primary_ray_starts_at_eye() {
        let camera = axis_camera();
        let ray = camera.primary_ray(1, 2, 4, 4).unwrap();
        assert_eq!(ray.origin(), camera.eye_position());
        let expected = camera.pixel_center(1, 2, 4, 4) - camera.eye_position();
        assert!((ray.dir() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_rejects_degenerate_viewing_direction() {
        let result = WindowCamera::new(
            Vector3f::new(0.0, 0.0, 0.0),
            1.0,
            1.0,
            Vector3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            1.0,
        );
        assert!(matches!(result, Err(RenderError::Math(_))));
    }

    #[test]
    fn test_rejects_parallel_orientation() {
        let result = WindowCamera::new(
            Vector3f::new(0.0, 0.0, 0.0),
            1.0,
            1.0,
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.0, 0.0, 2.0),
            1.0,
        );
        assert!(matches!(result, Err(RenderError::ParallelOrientation)));
    }

    #[test]
    fn test_rejects_non_positive_window_parameters() {
        let eye = Vector3f::new(0.0, 0.0, 0.0);
        let view = Vector3f::new(0.0, 0.0, -1.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        assert!(WindowCamera::new(eye, 0.0, 1.0, view, up, 1.0).is_err());
        assert!(WindowCamera::new(eye, 1.0, -1.0, view, up, 1.0).is_err());
        assert!(WindowCamera::new(eye, 1.0, 1.0, view, up, 0.0).is_err());
    }
}
