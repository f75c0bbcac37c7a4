// PresetScrub - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library only.
// Must NOT depend on: platform, app, or any I/O crate directly.

pub mod filter;
pub mod rules;
