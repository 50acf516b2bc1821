// Copyright @glimmer authors 2026

pub mod renderer;
pub mod simple;
