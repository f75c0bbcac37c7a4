// PresetScrub - lib.rs
//
// Library entry point, exposing all modules for integration testing.
// The binary in `main.rs` only adds argument parsing and exit handling.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
