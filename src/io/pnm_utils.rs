// Copyright @glimmer authors 2026

use crate::core::error::RenderError;
use crate::math::bitmap::Bitmap;

use std::fmt::Write as _;

/// Encode a bitmap as a plain-text pixel map: a 3-line header ("P3",
/// "<rows> <cols>", "255") followed by one "R G B" line per pixel in
/// row-major order, components truncated to integers.
pub fn encode_pnm(bitmap: &Bitmap) -> String {
    let mut out = String::new();
    let _ = write!(out, "P3\n{} {}\n255\n", bitmap.height(), bitmap.width());
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let pixel = &bitmap[(x, y)];
            let _ = write!(
                out,
                "{} {} {}\n",
                pixel[0] as i64, pixel[1] as i64, pixel[2] as i64
            );
        }
    }
    out
}

pub fn write_pnm_to_file(bitmap: &Bitmap, file_path: &str) -> Result<(), RenderError> {
    log::info!("Starting writing pnm image: {}.", file_path);
    std::fs::write(file_path, encode_pnm(bitmap))?;
    log::info!("Pnm image written, {} x {} pixels.", bitmap.height(), bitmap.width());
    Ok(())
}

/* Tests for pnm encoding */
