// PresetScrub - util/logging.rs
//
// Log output goes to stderr; stdout is reserved for the confirmation line
// and `--list-rules`. At info a run logs its start and its totals; at debug
// every removed line is logged with the rule that matched it.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// A set `RUST_LOG` wins outright. Otherwise the level comes from
/// [`level_directive`].
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_directive(debug_flag, config_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

/// `--debug` beats the config file, which beats the built-in default.
pub fn level_directive(debug_flag: bool, config_level: Option<&str>) -> &str {
    if debug_flag {
        "debug"
    } else {
        config_level.unwrap_or(super::constants::DEFAULT_LOG_LEVEL)
    }
}
