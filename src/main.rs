use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use smartalloc::cli::plan::{MAX_AGE, MIN_AGE};
use smartalloc::cli::scenarios::AgeRange;
use smartalloc::core::RiskProfile;
use smartalloc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Recommend an allocation and project its returns
    Plan {
        /// Investor age in years
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_AGE)..=i64::from(MAX_AGE)))]
        age: Option<u32>,
        /// Risk profile: high, moderate or low
        #[arg(short, long)]
        risk: Option<RiskProfile>,
        /// Total amount to invest
        #[arg(short = 'm', long)]
        amount: Option<f64>,
        /// Print the plan as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Compare projected outcomes across a range of ages
    Scenarios {
        /// Risk profile: high, moderate or low
        #[arg(short, long)]
        risk: Option<RiskProfile>,
        /// Total amount to invest
        #[arg(short = 'm', long)]
        amount: Option<f64>,
        /// First age in the sweep
        #[arg(long, default_value_t = MIN_AGE)]
        from: u32,
        /// Last age in the sweep
        #[arg(long, default_value_t = MAX_AGE)]
        to: u32,
        /// Years between scenarios
        #[arg(long, default_value_t = 5)]
        step: u32,
    },
}

impl From<Commands> for smartalloc::AppCommand {
    fn from(cmd: Commands) -> smartalloc::AppCommand {
        match cmd {
            Commands::Plan {
                age,
                risk,
                amount,
                json,
            } => smartalloc::AppCommand::Plan {
                age,
                risk_profile: risk,
                total_investment: amount,
                json,
            },
            Commands::Scenarios {
                risk,
                amount,
                from,
                to,
                step,
            } => smartalloc::AppCommand::Scenarios {
                risk_profile: risk,
                total_investment: amount,
                range: AgeRange { from, to, step },
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => smartalloc::cli::setup::setup_at_path(path),
            None => smartalloc::cli::setup::setup(),
        },
        Some(cmd) => smartalloc::run_command(cmd.into(), cli.config_path.as_deref()),
        None => Cli::command().print_help().map_err(anyhow::Error::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(%error, "Application failed");
            ExitCode::FAILURE
        }
    }
}
