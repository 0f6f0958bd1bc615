//! Healing-window extraction for programme messages.
//!
//! A healing line names an aircraft and one or more maintenance time
//! windows: "S3: 0800-1200 1400-1600 engine bay". Every distinct
//! time-range becomes its own window record.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::{Code, HealingWindow};

/// Code at the start, optional colon, remainder
static CODE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([FfSs]\d)\s*:?\s*(.*)$").unwrap());

/// An embedded time-range token
static TIME_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})\s*-\s*(\d{4})").unwrap());

/// Parse one healing line into zero or more window records.
///
/// Blank lines and bare "nil" produce nothing. A code-less line is kept as
/// a single label-only record.
pub fn parse_healing_line(line: &str) -> Vec<HealingWindow> {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("nil") {
        return Vec::new();
    }

    let Some(caps) = CODE_HEAD.captures(line) else {
        return vec![HealingWindow {
            code: None,
            label: line.to_string(),
        }];
    };

    let code = Code::from_str(&caps[1]).ok();
    let rest = caps[2].trim();

    let matches: Vec<_> = TIME_RANGE.captures_iter(rest).collect();
    if matches.is_empty() {
        // No window token: the whole remainder is one record's label
        return vec![HealingWindow {
            code,
            label: rest.to_string(),
        }];
    }

    let mut windows: Vec<HealingWindow> = matches
        .iter()
        .map(|caps| HealingWindow {
            code,
            label: format!("{}-{}", &caps[1], &caps[2]),
        })
        .collect();

    // Trailing non-time text rides on the last window only
    let last_end = matches
        .last()
        .and_then(|caps| caps.get(0))
        .map_or(0, |m| m.end());
    let trailing = rest[last_end..]
        .trim_matches([' ', '\t', ',', ';', '-'])
        .trim();
    if !trailing.is_empty() {
        if let Some(last) = windows.last_mut() {
            last.label = format!("{} {trailing}", last.label);
        }
    }

    windows
}
