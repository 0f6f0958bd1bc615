//! Date-header resolution for programme messages.
//!
//! Headers look like "13 Aug 25 (Wed)", "2 September", or "01 AUG 2025".
//! Month names match by prefix from three letters up; a missing year falls
//! back to the configured year. Resolution failure is not an error: the
//! caller keeps the cleaned label and moves on with no ISO date.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::constants::MONTH_PREFIXES;

/// Day, month word, optional 2- or 4-digit year
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*(?:st|nd|rd|th)?\s+([A-Za-z]{3,})\.?\s*,?\s*(\d{4}|\d{2})?\b")
        .unwrap()
});

/// A line that opens a day-block in a weekly paste: the date pattern at the
/// very start of the line
static HEADER_AT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d{1,2}\s*(?:st|nd|rd|th)?\s+([A-Za-z]{3,})\b").unwrap());

/// Resolve a month word by prefix ("aug", "Aug", "AUGUST" -> 8)
fn month_number(word: &str) -> Option<u32> {
    let word = word.to_lowercase();
    MONTH_PREFIXES
        .iter()
        .position(|prefix| word.starts_with(prefix))
        .map(|idx| idx as u32 + 1)
}

/// Strip emoji and other non-ASCII decoration from a header line
pub fn clean_label(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_ascii())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a date header into an ISO date and a display label.
///
/// The label is always produced; the date is `None` when no day/month pair
/// in the line resolves to a real calendar date.
pub fn resolve(line: &str, fallback_year: i32) -> (Option<NaiveDate>, String) {
    let label = clean_label(line);

    for caps in DATE.captures_iter(line) {
        let Some(month) = month_number(&caps[2]) else {
            continue;
        };
        let Ok(day) = caps[1].parse::<u32>() else {
            continue;
        };
        let year = match caps.get(3).map(|m| m.as_str()) {
            Some(y) if y.len() == 4 => y.parse::<i32>().unwrap_or(fallback_year),
            Some(y) => y.parse::<i32>().map(|y| 2000 + y).unwrap_or(fallback_year),
            None => fallback_year,
        };
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return (Some(date), label);
        }
    }

    (None, label)
}

/// Whether a line opens a new day-block in a weekly paste
pub fn is_date_header(line: &str) -> bool {
    HEADER_AT_START
        .captures(line.trim())
        .is_some_and(|caps| month_number(&caps[1]).is_some())
}
