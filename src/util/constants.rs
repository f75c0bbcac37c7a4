// PresetScrub - util/constants.rs
//
// Single source of truth for all named constants and defaults,
// including the compiled-in exclusion rule lists.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PresetScrub";

/// Application identifier used for config directories.
pub const APP_ID: &str = "PresetScrub";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Target
// =============================================================================

/// File rewritten when no path is given on the command line.
pub const DEFAULT_TARGET_PATH: &str = "src/core/PresetManager.mqh";

// =============================================================================
// Exclusion rules
// =============================================================================

/// Preset parameter identifiers removed from the grid and trend subsystems.
/// Any line containing one of these anywhere is dropped.
pub const DEPRECATED_PARAM_TOKENS: &[&str] = &[
    "grid_dynamic_enabled",
    "grid_warm_levels",
    "grid_refill_threshold",
    "grid_refill_batch",
    "grid_max_pendings",
    "grid_protection_enabled",
    "grid_cooldown_minutes",
    "trend_filter_enabled",
    "trend_action",
    "trend_ema_timeframe",
    "trend_ema_period",
    "trend_adx_period",
    "trend_adx_threshold",
    "trend_buffer_pips",
];

/// Comment phrases naming the removed feature areas.
pub const REMOVED_FEATURE_PHRASES: &[&str] = &["Grid Protection", "Trend Filter", "Dynamic Grid"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a file line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
