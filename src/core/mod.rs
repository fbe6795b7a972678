// pwaicons - core/mod.rs
//
// Core business logic layer: icon model, renderer, manifest fragment.
// Must NOT depend on: platform, app, or perform file I/O directly.

pub mod manifest;
pub mod model;
pub mod render;
