// pwaicons - lib.rs
//
// Library entry point, exposing the renderer, driver, and platform helpers
// for integration testing and programmatic use.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::app::generate::{generate_all, GeneratedIcon, Progress};
pub use crate::core::model::{IconDocument, IconSize};
pub use crate::core::render::{render, render_icon};
pub use crate::util::error::{IconError, Result};
