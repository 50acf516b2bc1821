// Copyright @glimmer authors 2025

pub mod bitmap;
pub mod constants;
pub mod ray;
pub mod vector;
pub mod warp;
