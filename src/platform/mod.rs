// pwaicons - platform/mod.rs
//
// Platform abstraction layer: config directory resolution, file writes.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
