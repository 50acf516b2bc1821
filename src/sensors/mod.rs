// Copyright @glimmer authors 2026

pub mod window;
