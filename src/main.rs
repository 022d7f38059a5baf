use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use efund::core::estimator::{FundInput, IncomeStability, RiskTolerance};
use efund::core::log::init_logging;

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
    /// Display the recommended emergency fund targets
    Estimate(InputArgs),
    /// Display how the coverage months and savings target are derived
    Breakdown(InputArgs),
    /// Display emergency fund guidance
    Tips,
}

/// One-shot answers. When any of these is given the configuration file is
/// ignored and the remaining answers take the questionnaire defaults.
#[derive(Args)]
struct InputArgs {
    /// Monthly living expenses in dollars
    #[arg(long)]
    expenses: Option<f64>,

    /// How predictable your income is
    #[arg(long, value_enum)]
    stability: Option<StabilityArg>,

    /// Other people rely on your income
    #[arg(long)]
    dependents: bool,

    /// How much buffer risk you accept
    #[arg(long, value_enum)]
    risk: Option<RiskArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StabilityArg {
    /// Salaried or otherwise predictable income
    Stable,
    /// Freelance, commission, or gig income
    Variable,
}

#[derive(Clone, Copy, ValueEnum)]
enum RiskArg {
    /// Maximum security
    Low,
    /// Balanced approach
    Medium,
    /// Comfortable with less buffer
    High,
}

impl From<StabilityArg> for IncomeStability {
    fn from(arg: StabilityArg) -> IncomeStability {
        match arg {
            StabilityArg::Stable => IncomeStability::Stable,
            StabilityArg::Variable => IncomeStability::Variable,
        }
    }
}

impl From<RiskArg> for RiskTolerance {
    fn from(arg: RiskArg) -> RiskTolerance {
        match arg {
            RiskArg::Low => RiskTolerance::Low,
            RiskArg::Medium => RiskTolerance::Medium,
            RiskArg::High => RiskTolerance::High,
        }
    }
}

impl InputArgs {
    fn to_input(&self) -> Option<FundInput> {
        if self.expenses.is_none()
            && self.stability.is_none()
            && !self.dependents
            && self.risk.is_none()
        {
            return None;
        }

        let defaults = FundInput::default();
        let input = FundInput {
            monthly_expenses: self.expenses.unwrap_or(defaults.monthly_expenses),
            income_stability: self
                .stability
                .map_or(defaults.income_stability, Into::into),
            has_dependents: self.dependents,
            risk_tolerance: self.risk.map_or(defaults.risk_tolerance, Into::into),
        };
        Some(input.sanitized())
    }
}

impl From<Commands> for efund::AppCommand {
    fn from(cmd: Commands) -> efund::AppCommand {
        match cmd {
            Commands::Estimate(args) => efund::AppCommand::Estimate {
                input: args.to_input(),
            },
            Commands::Breakdown(args) => efund::AppCommand::Breakdown {
                input: args.to_input(),
            },
            Commands::Tips => efund::AppCommand::Tips,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => efund::cli::setup::setup(),
        Some(cmd) => efund::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
