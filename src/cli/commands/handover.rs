//! Handover command: parse a handover document into its sections.

use colored::*;
use tracing::info;

use super::shared;
use crate::Result;
use crate::app::models::HandoverDocument;
use crate::app::services::handover_parser::parse_handover;
use crate::cli::args::{OutputFormat, ReportArgs};

/// Handover command runner
pub fn run_handover(args: ReportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let text = shared::read_input(args.input.as_deref())?;
    let document = parse_handover(&text);

    info!(
        completed = document.completed.len(),
        outstanding = document.outstanding.len(),
        skipped = document.stats.skipped,
        "parsed handover document"
    );

    match args.format {
        OutputFormat::Json => shared::print_json(&document),
        OutputFormat::Human => {
            render_human(&document);
            Ok(())
        }
    }
}

fn render_human(document: &HandoverDocument) {
    if !document.completed.is_empty() {
        println!("{}", "Jobs completed".green().bold());
        for (code, items) in &document.completed {
            println!("  {}", code.to_string().bold());
            for item in items {
                println!("    - {item}");
            }
        }
    }

    if !document.outstanding.is_empty() {
        println!("{}", "Jobs outstanding".red().bold());
        for (code, entry) in &document.outstanding {
            match &entry.tag {
                Some(tag) => println!("  {} ({tag})", code.to_string().bold()),
                None => println!("  {}", code.to_string().bold()),
            }
            for item in &entry.items {
                println!("    - {item}");
            }
        }
    }

    let extra = &document.extra;
    print_section("25 hr projection", &extra.proj_25hr);
    print_section("50 hr projection", &extra.proj_50hr);
    print_section("100 hr projection", &extra.proj_100hr);
    print_section("200 hr projection", &extra.proj_200hr);
    print_section("Phase", &extra.phase);
    print_section("Wheels", &extra.wheels);
    print_section("Engines", &extra.engines);
    print_section("AGE", &extra.age);
    print_section("Tools", &extra.tools);
    print_section("Fuel", &extra.fuel);
    print_section("Armament", &extra.armament);
    print_section("Lessons learned", &extra.lessons);

    if document.completed.is_empty() && document.outstanding.is_empty() {
        println!("{}", "No aircraft sections found".yellow());
    }

    println!();
    println!("{}", shared::render_stats(&document.stats).dimmed());
}

fn print_section(title: &str, items: &[String]) {
    if !items.is_empty() {
        println!("{}", title.bold());
        for item in items {
            println!("  - {item}");
        }
    }
}
