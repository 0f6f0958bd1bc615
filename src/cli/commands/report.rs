//! Report command: parse a Night Report into per-aircraft entries.

use colored::*;
use tracing::info;

use super::shared;
use crate::Result;
use crate::app::services::report_parser::{NightReport, parse_night_report};
use crate::cli::args::{OutputFormat, ReportArgs};

/// Report command runner
pub fn run_report(args: ReportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let text = shared::read_input(args.input.as_deref())?;
    let report = parse_night_report(&text);

    info!(
        entries = report.entries.len(),
        skipped = report.stats.skipped,
        "parsed night report"
    );

    match args.format {
        OutputFormat::Json => shared::print_json(&report),
        OutputFormat::Human => {
            render_human(&report);
            Ok(())
        }
    }
}

fn render_human(report: &NightReport) {
    if report.entries.is_empty() {
        println!("{}", "No aircraft entries found".yellow());
    }

    for (code, entry) in &report.entries {
        println!(
            "{} - {} {}",
            code.to_string().bold(),
            entry.title,
            format!("[{}]", entry.tag).cyan()
        );
        if let Some(input) = &entry.input {
            println!("  Input: {input}");
        }
        if let Some(etr) = &entry.etr {
            println!("  ETR:   {etr}");
        }
        for note in &entry.notes {
            println!("  - {note}");
        }
    }

    println!();
    println!("{}", shared::render_stats(&report.stats).dimmed());
}
