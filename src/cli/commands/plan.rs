//! Plan command: parse a daily or weekly flying programme.

use colored::*;
use tracing::info;

use super::shared;
use crate::Result;
use crate::app::models::{DatePlanEntry, MissionLine};
use crate::app::services::date_plan::{parse_daily, parse_weekly};
use crate::cli::args::{OutputFormat, PlanArgs};
use crate::config::ParserConfig;

/// Plan command runner
pub fn run_plan(args: PlanArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let text = shared::read_input(args.input.as_deref())?;
    let config = match args.year {
        Some(year) => ParserConfig::with_year(year),
        None => ParserConfig::default(),
    };

    if args.weekly {
        let entries = parse_weekly(&text, &config);
        info!(days = entries.len(), "parsed weekly programme");

        match args.format {
            OutputFormat::Json => shared::print_json(&entries),
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("{}", "No date headers found".yellow());
                }
                for entry in &entries {
                    render_entry(entry);
                    println!();
                }
                Ok(())
            }
        }
    } else {
        let entry = parse_daily(&text, &config);
        info!(
            missions = entry.missions.len(),
            spares = entry.spares.len(),
            "parsed daily programme"
        );

        match args.format {
            OutputFormat::Json => shared::print_json(&entry),
            OutputFormat::Human => {
                render_entry(&entry);
                println!();
                println!("{}", shared::render_stats(&entry.stats).dimmed());
                Ok(())
            }
        }
    }
}

fn render_entry(entry: &DatePlanEntry) {
    match entry.date_iso {
        Some(date) => println!("{} ({})", date.format("%Y-%m-%d").to_string().bold(), entry.date_label),
        None => println!("{}", entry.date_label.bold()),
    }

    print_mission_list("Missions", &entry.missions);
    print_mission_list("Spares", &entry.spares);

    if !entry.healing.is_empty() {
        println!("  {}", "Healing".bold());
        for window in &entry.healing {
            match window.code {
                Some(code) => println!("    {code} {}", window.label),
                None => println!("    {}", window.label),
            }
        }
    }

    print_lines("Hot", &entry.hot);
    print_lines("Cold", &entry.cold);
    print_lines("Ops brief", &entry.ops);
    print_lines("Notes", &entry.notes);
}

fn print_mission_list(title: &str, lines: &[MissionLine]) {
    if !lines.is_empty() {
        println!("  {}", title.bold());
        for line in lines {
            match line.code {
                Some(code) => println!("    {code} {}", line.label),
                None => println!("    {}", line.label),
            }
        }
    }
}

fn print_lines(title: &str, lines: &[String]) {
    if !lines.is_empty() {
        println!("  {}", title.bold());
        for line in lines {
            println!("    {line}");
        }
    }
}
