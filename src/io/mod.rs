// Copyright @glimmer authors 2026

pub mod png_utils;
pub mod pnm_utils;
