//! Defects command: parse defect update messages into per-aircraft records.

use colored::*;
use tracing::info;

use super::shared;
use crate::Result;
use crate::app::models::DefectParse;
use crate::app::services::defect_parser::parse_defect_messages;
use crate::cli::args::{OutputFormat, ReportArgs};

/// Defects command runner
pub fn run_defects(args: ReportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let text = shared::read_input(args.input.as_deref())?;
    let parse = parse_defect_messages(&text);

    info!(
        aircraft = parse.by_code.len(),
        skipped = parse.stats.skipped,
        "parsed defect messages"
    );

    match args.format {
        OutputFormat::Json => shared::print_json(&parse),
        OutputFormat::Human => {
            render_human(&parse);
            Ok(())
        }
    }
}

fn render_human(parse: &DefectParse) {
    if parse.by_code.is_empty() {
        println!("{}", "No defect records found".yellow());
    }

    for (code, record) in &parse.by_code {
        println!("{}", code.to_string().bold());
        print_field("U/S", &record.us);
        print_field("Defect", &record.defect);
        print_field("Rect", &record.rect);
        print_field("ETR", &record.etr);
        print_field("W/C", &record.workcenter);
        print_field("Prime", &record.prime);
        print_field("System", &record.system);
        if record.recovery {
            println!("  {}", "Post-phase recovery".magenta());
        }
        print_list("GR", &record.gr);
        print_list("FCF", &record.fcf);
    }

    println!();
    println!("{}", shared::render_stats(&parse.stats).dimmed());
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("  {label}: {value}");
    }
}

fn print_list(label: &str, items: &[String]) {
    if !items.is_empty() {
        println!("  {label}:");
        for item in items {
            println!("    - {item}");
        }
    }
}
