// pwaicons - app/mod.rs
//
// Application layer: orchestrates rendering and file output.
// Dependencies: core, platform, util.

pub mod generate;
