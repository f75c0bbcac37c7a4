// PresetScrub - platform/mod.rs
//
// Platform abstraction layer: filesystem access and config directories.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
