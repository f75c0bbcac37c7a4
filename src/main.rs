// PresetScrub - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Running the scrub pipeline and reporting the outcome

use clap::Parser;
use presetscrub::app::scrub;
use presetscrub::core::rules::{ExclusionRules, RuleKind};
use presetscrub::platform::config::{self, PlatformPaths};
use presetscrub::util::{constants, logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// PresetScrub - strips deprecated grid and trend parameters from a preset file.
///
/// Every line mentioning a removed parameter, or a comment naming a removed
/// feature, is deleted. The file is rewritten in place.
#[derive(Parser, Debug)]
#[command(name = "presetscrub", version, about)]
struct Cli {
    /// File to rewrite.
    #[arg(default_value = constants::DEFAULT_TARGET_PATH)]
    path: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Print the built-in exclusion rules and exit without touching any file.
    #[arg(long = "list-rules")]
    list_rules: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paths = PlatformPaths::resolve();
    let (app_config, config_warnings) = config::load_config(&paths.config_file());

    logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning; using defaults");
    }

    tracing::debug!(
        version = constants::APP_VERSION,
        path = %cli.path.display(),
        "PresetScrub starting"
    );

    let rules = ExclusionRules::deprecated_preset_params();

    if cli.list_rules {
        for token in rules.tokens() {
            println!("{}\t{token}", RuleKind::Token.label());
        }
        for phrase in rules.phrases() {
            println!("{}\t{phrase}", RuleKind::Phrase.label());
        }
        return ExitCode::SUCCESS;
    }

    match scrub::scrub_file(&cli.path, &rules) {
        Ok(report) => {
            println!("{}", report.confirmation());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Scrub failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
