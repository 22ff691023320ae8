//! Command-line interface for the Tripweave planner.
//!
//! `tripweave plan` reads a JSON plan request and a JSON snapshot of places,
//! runs the planner and prints the itinerary as JSON. Inputs can come from
//! CLI flags, configuration files or `TRIPWEAVE_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_PLACES: &str = "places";
pub(crate) const ARG_PLAN_LIKED: &str = "liked";
pub(crate) const ARG_PLAN_PLANNER_CONFIG: &str = "planner-config";
pub(crate) const ARG_PLAN_SEED: &str = "seed";
pub(crate) const ARG_PLAN_OUTPUT: &str = "output";
pub(crate) const ENV_PLAN_REQUEST: &str = "TRIPWEAVE_CMDS_PLAN_REQUEST_PATH";
pub(crate) const ENV_PLAN_PLACES: &str = "TRIPWEAVE_CMDS_PLAN_PLACES";

/// Run the Tripweave CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration loading,
/// input decoding or planning fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripweave",
    about = "Plan day-by-day travel itineraries from a snapshot of places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a trip and print the itinerary as JSON.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
