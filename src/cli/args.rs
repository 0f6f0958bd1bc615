//! Command-line argument definitions for the shift-log processor.
//!
//! Defines the complete CLI interface using the clap derive API. One
//! subcommand per message family, each reading from a file or stdin.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the shift-log processor
///
/// Parses maintenance shift messages (night reports, defect updates,
/// handover documents, flying programmes) into structured records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shiftlog-processor",
    version,
    about = "Parse maintenance shift messages into structured records",
    long_about = "Parses pasted maintenance shift messages into structured, machine-readable \
                  records. Handles night reports, defect updates, handover documents, and \
                  daily or weekly flying programmes. Parsing is tolerant: malformed lines \
                  are dropped and counted, never fatal."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands, one per message family
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a Night Report message into per-aircraft entries
    Report(ReportArgs),
    /// Parse defect update messages into per-aircraft defect records
    Defects(ReportArgs),
    /// Parse a handover document into its sections
    Handover(ReportArgs),
    /// Parse a daily or weekly flying programme
    Plan(PlanArgs),
}

/// Arguments shared by the single-document commands
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Input file with the pasted message
    ///
    /// Reads from stdin when omitted, so messages can be piped straight in.
    #[arg(value_name = "FILE", help = "Input file (stdin when omitted)")]
    pub input: Option<PathBuf>,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the plan command
#[derive(Debug, Clone, Parser)]
pub struct PlanArgs {
    /// Input file with the pasted programme
    #[arg(value_name = "FILE", help = "Input file (stdin when omitted)")]
    pub input: Option<PathBuf>,

    /// Treat the input as a weekly paste with one block per date header
    #[arg(short = 'w', long = "weekly", help = "Parse as a weekly programme")]
    pub weekly: bool,

    /// Year assumed for date headers that omit one
    ///
    /// Defaults to the current year.
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Fallback year for year-less dates")]
    pub year: Option<i32>,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReportArgs {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(self.input.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl PlanArgs {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(self.input.as_deref())?;

        if let Some(year) = self.year {
            if !(2000..=2100).contains(&year) {
                return Err(Error::configuration(format!(
                    "Year out of range: {year}"
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

fn validate_input(input: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = input {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                path.display()
            )));
        }
        if path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is a directory: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn report_args(input: Option<PathBuf>) -> ReportArgs {
        ReportArgs {
            input,
            format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_log_level() {
        let mut args = report_args(None);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_validate_missing_input() {
        let args = report_args(Some(PathBuf::from("/nonexistent/message.txt")));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_existing_input() {
        let file = NamedTempFile::new().unwrap();
        let args = report_args(Some(file.path().to_path_buf()));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_stdin_input() {
        assert!(report_args(None).validate().is_ok());
    }

    #[test]
    fn test_plan_year_range() {
        let mut args = PlanArgs {
            input: None,
            weekly: false,
            year: Some(2025),
            format: OutputFormat::Json,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        args.year = Some(1925);
        assert!(args.validate().is_err());
    }
}
