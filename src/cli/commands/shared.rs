//! Shared components for CLI commands.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::app::models::ScanStats;
use crate::{Error, Result};

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shiftlog_processor={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read the message text from a file, or from stdin when no path was given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::io("Failed to read stdin", e))?;
            Ok(text)
        }
    }
}

/// Print a result as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to render result as JSON", e))?;
    println!("{json}");
    Ok(())
}

/// One-line scan summary for human output
pub fn render_stats(stats: &ScanStats) -> String {
    format!(
        "{} lines scanned, {} matched, {} skipped",
        stats.scanned, stats.matched, stats.skipped
    )
}
