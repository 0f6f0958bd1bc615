use clap::Parser;
use shiftlog_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Shiftlog Processor - Maintenance Shift Message Parser");
    println!("=====================================================");
    println!();
    println!("Parse pasted maintenance shift messages into structured records.");
    println!("Parsing is tolerant: malformed lines are dropped and counted, never fatal.");
    println!();
    println!("USAGE:");
    println!("    shiftlog-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Parse a Night Report message into per-aircraft entries");
    println!("    defects     Parse defect update messages into per-aircraft defect records");
    println!("    handover    Parse a handover document into its sections");
    println!("    plan        Parse a daily or weekly flying programme");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a night report from a file:");
    println!("    shiftlog-processor report night_report.txt");
    println!();
    println!("    # Parse defect updates piped from the clipboard, as JSON:");
    println!("    shiftlog-processor defects --format json < defects.txt");
    println!();
    println!("    # Parse a weekly programme, pinning year-less dates to 2025:");
    println!("    shiftlog-processor plan --weekly --year 2025 programme.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    shiftlog-processor <COMMAND> --help");
}
