pub mod cli;
pub mod core;

use crate::core::config::{AppConfig, Profile};
use crate::core::estimator::FundInput;
use anyhow::Result;
use tracing::{debug, info};

/// Commands the library can execute once argument parsing is done.
///
/// `Estimate` and `Breakdown` carry an optional one-shot input; when present
/// the configuration file is ignored and a single ad-hoc profile is used.
pub enum AppCommand {
    Estimate { input: Option<FundInput> },
    Breakdown { input: Option<FundInput> },
    Tips,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Emergency fund estimator starting...");

    match command {
        AppCommand::Tips => {
            cli::tips::run();
            Ok(())
        }
        AppCommand::Estimate { input: Some(input) } => {
            cli::estimate::run(&[Profile::adhoc(input)])
        }
        AppCommand::Estimate { input: None } => cli::estimate::run(&load_profiles(config_path)?),
        AppCommand::Breakdown { input: Some(input) } => {
            cli::breakdown::run(&[Profile::adhoc(input)])
        }
        AppCommand::Breakdown { input: None } => cli::breakdown::run(&load_profiles(config_path)?),
    }
}

/// Loads the household profiles that config-driven commands render.
///
/// An explicit path must load. With no path given, a missing config file
/// falls back to the default profile so the calculator always has the
/// questionnaire's initial state to work from.
fn load_profiles(config_path: Option<&str>) -> Result<Vec<Profile>> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => {
            let path = AppConfig::default_config_path()?;
            if path.exists() {
                AppConfig::load_from_path(&path)?
            } else {
                debug!("No config file at {}, using defaults", path.display());
                AppConfig::default()
            }
        }
    };
    debug!("Loaded config: {config:#?}");

    if config.profiles.is_empty() {
        anyhow::bail!("No profiles defined in the configuration file");
    }
    Ok(config.profiles)
}
