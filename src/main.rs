//! Nutriplan
//!
//! Command line front end: computes daily targets and recipe portions from
//! JSON input, writing JSON to stdout and logs to stderr.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nutriplan::build_info::{self, BuildInfo};
use nutriplan::config::Config;
use nutriplan::models::{MealPlan, ProfileForm};
use nutriplan::tools::{self, PlanOptions, PlanRequest};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reject empty categories or recipes and non-finite portions
    #[arg(long, global = true)]
    strict: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Print the build banner to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the daily calorie and macro target for a profile
    Target(TargetArgs),
    /// Allocate portions over a JSON meal plan (stdin when no file is given)
    Allocate { input: Option<PathBuf> },
    /// Build a full plan from a JSON profile and recipe list (stdin when no file is given)
    Plan { input: Option<PathBuf> },
    /// Print build information
    Version,
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// male or female
    #[arg(long)]
    gender: String,
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,
    /// Height in centimeters
    #[arg(long)]
    height: f64,
    /// Age in years
    #[arg(long)]
    age: f64,
    /// Activity level, 1 (sedentary) to 5 (extra active)
    #[arg(long)]
    activity_level: i64,
    /// Calorie deficit in percent of TDEE
    #[arg(long, default_value_t = 0.0)]
    deficit: f64,
}

impl From<TargetArgs> for ProfileForm {
    fn from(args: TargetArgs) -> Self {
        Self {
            gender: args.gender,
            weight: args.weight,
            height: args.height,
            age: args.age,
            activity_level: args.activity_level,
            target_deficit_percent: args.deficit,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env_config = Config::from_env();
    let config = Config {
        strict: cli.strict || env_config.strict,
        pretty: cli.pretty || env_config.pretty,
        ..env_config
    };

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    if cli.verbose {
        build_info::print_startup_banner();
    }

    let options = PlanOptions {
        strict: config.strict,
    };

    match cli.command {
        Command::Target(args) => {
            let response = tools::daily_target(&ProfileForm::from(args))?;
            emit(&response, config.pretty)
        }
        Command::Allocate { input } => {
            let plan: MealPlan = tools::load_json(input.as_deref())?;
            let plan = tools::allocate_plan(plan, &options)?;
            emit(&plan, config.pretty)
        }
        Command::Plan { input } => {
            let request: PlanRequest = tools::load_json(input.as_deref())?;
            let response = tools::build_plan(request, &options)?;
            emit(&response, config.pretty)
        }
        Command::Version => emit(&BuildInfo::current(), config.pretty),
    }
}

/// Write a value to stdout as JSON; non-finite numbers come out as `null`
fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
