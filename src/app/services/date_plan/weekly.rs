//! Weekly programme parsing: day-block splitting over the daily parser.

use tracing::debug;

use super::daily::{match_keyword, parse_daily};
use super::date_header::is_date_header;
use crate::app::models::DatePlanEntry;
use crate::config::ParserConfig;

/// Parse a weekly programme paste into one entry per recognized date
/// header, in document order.
///
/// Day-blocks are the text slices between consecutive date-header lines.
/// A block whose body carries no section keyword gets an implicit `RTS:`
/// prepended: bare lines under a weekly date header are missions by
/// default.
pub fn parse_weekly(text: &str, config: &ParserConfig) -> Vec<DatePlanEntry> {
    let normalized = text.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.lines().collect();

    let header_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_date_header(line))
        .map(|(idx, _)| idx)
        .collect();

    let mut entries = Vec::with_capacity(header_indices.len());
    for (slot, &start) in header_indices.iter().enumerate() {
        let end = header_indices
            .get(slot + 1)
            .copied()
            .unwrap_or(lines.len());

        let header = lines[start];
        let body = &lines[start + 1..end];
        let has_keyword = body.iter().any(|line| match_keyword(line).is_some());

        let mut block = String::from(header);
        if !has_keyword {
            block.push_str("\nRTS:");
        }
        for line in body {
            block.push('\n');
            block.push_str(line);
        }

        entries.push(parse_daily(&block, config));
    }

    debug!(days = entries.len(), "parsed weekly programme");

    entries
}
