// PresetScrub - app/mod.rs
//
// Application layer: pipeline orchestration.
// Dependencies: core, platform, util.

pub mod scrub;
