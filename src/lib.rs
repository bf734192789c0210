pub mod cli;
pub mod core;

use anyhow::Result;
use tracing::debug;

use crate::cli::scenarios::AgeRange;
use crate::core::RiskProfile;
use crate::core::config::AppConfig;

/// Commands that need a loaded configuration.
///
/// `None` fields are filled from the config's plan defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Plan {
        age: Option<u32>,
        risk_profile: Option<RiskProfile>,
        total_investment: Option<f64>,
        json: bool,
    },
    Scenarios {
        risk_profile: Option<RiskProfile>,
        total_investment: Option<f64>,
        range: AgeRange,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    run_with_config(command, &config)
}

pub fn run_with_config(command: AppCommand, config: &AppConfig) -> Result<()> {
    let defaults = &config.defaults;
    match command {
        AppCommand::Plan {
            age,
            risk_profile,
            total_investment,
            json,
        } => cli::plan::run(
            config,
            age.unwrap_or(defaults.age),
            risk_profile.unwrap_or(defaults.risk_profile),
            total_investment.unwrap_or(defaults.total_investment),
            json,
        ),
        AppCommand::Scenarios {
            risk_profile,
            total_investment,
            range,
        } => cli::scenarios::run(
            config,
            risk_profile.unwrap_or(defaults.risk_profile),
            total_investment.unwrap_or(defaults.total_investment),
            range,
        ),
    }
}
