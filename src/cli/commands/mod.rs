//! Command implementations for the shift-log processor CLI.
//!
//! Each subcommand lives in its own module and follows the same shape:
//! set up logging, validate arguments, read the input text, parse it, and
//! render the result in the requested format.

pub mod defects;
pub mod handover;
pub mod plan;
pub mod report;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler named by the CLI arguments
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Defects(defects_args) => defects::run_defects(defects_args),
        Commands::Handover(handover_args) => handover::run_handover(handover_args),
        Commands::Plan(plan_args) => plan::run_plan(plan_args),
    }
}
