// Copyright @glimmer authors 2026

use crate::core::error::RenderError;
use crate::math::bitmap::Bitmap;

// Write a bitmap as PNG for quick viewing; the text pixel map stays the
// primary output format.
pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str) -> Result<(), RenderError> {
    log::info!("Starting writing png image: {}.", file_path);

    let mut img = image::RgbImage::new(bitmap.width() as u32, bitmap.height() as u32);
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let pixel = &bitmap[(x, y)];
            img.put_pixel(
                x as u32,
                y as u32,
                image::Rgb([
                    pixel[0].clamp(0.0, 255.0) as u8,
                    pixel[1].clamp(0.0, 255.0) as u8,
                    pixel[2].clamp(0.0, 255.0) as u8,
                ]),
            );
        }
    }
    img.save(file_path)
        .map_err(|err| RenderError::Encode(err.to_string()))
}
