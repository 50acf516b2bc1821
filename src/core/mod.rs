// Copyright @glimmer authors 2026

pub mod error;
pub mod rng;
pub mod scene;
pub mod shape;
