//! Daily programme parsing: the section state machine over one day's lines.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::date_header;
use super::healing::parse_healing_line;
use super::mission::parse_mission_line;
use crate::app::models::{DatePlanEntry, MissionKind};
use crate::config::ParserConfig;

/// Section keyword at line start, optional colon, optional inline content
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(rts|healing|hot|cold|ops\s*brief|notes)\b\s*:?\s*(.*)$").unwrap()
});

/// The open section of a daily message.
///
/// Lines before the first keyword are implicit mission/spare lines, which
/// is why `Missions` is the initial state rather than a "none" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSection {
    Missions,
    Healing,
    Hot,
    Cold,
    Ops,
    Notes,
}

/// Classify a line as a section keyword, returning the section and any
/// content that shared the keyword's line
pub fn match_keyword(line: &str) -> Option<(PlanSection, String)> {
    let caps = KEYWORD.captures(line.trim())?;
    let keyword: String = caps[1].to_lowercase().split_whitespace().collect();
    let section = match keyword.as_str() {
        "rts" => PlanSection::Missions,
        "healing" => PlanSection::Healing,
        "hot" => PlanSection::Hot,
        "cold" => PlanSection::Cold,
        "opsbrief" => PlanSection::Ops,
        _ => PlanSection::Notes,
    };
    Some((section, caps[2].trim().to_string()))
}

/// Parse one daily programme message.
///
/// The first non-empty line is the date header; everything after it flows
/// through the section state machine. Never fails: an unresolvable header
/// leaves `date_iso` empty, unrecognized lines are dropped and counted.
pub fn parse_daily(text: &str, config: &ParserConfig) -> DatePlanEntry {
    let mut entry = DatePlanEntry::default();
    let normalized = text.replace("\r\n", "\n");
    let mut lines = normalized.lines().map(str::trim).filter(|l| !l.is_empty());

    let Some(header) = lines.next() else {
        return entry;
    };
    let (date_iso, date_label) = date_header::resolve(header, config.fallback_year());
    entry.date_iso = date_iso;
    entry.date_label = date_label;
    entry.stats.matched();

    let mut section = PlanSection::Missions;
    for line in lines {
        if let Some((next, inline)) = match_keyword(line) {
            section = next;
            entry.stats.matched();
            if !inline.is_empty() {
                feed(&mut entry, section, &inline);
            }
            continue;
        }
        feed(&mut entry, section, line);
    }

    debug!(
        date = ?entry.date_iso,
        missions = entry.missions.len(),
        spares = entry.spares.len(),
        healing = entry.healing.len(),
        "parsed daily programme"
    );

    entry
}

/// Route one content line to its section's line parser
fn feed(entry: &mut DatePlanEntry, section: PlanSection, line: &str) {
    match section {
        PlanSection::Missions => match parse_mission_line(line) {
            Some(record) => {
                match record.kind {
                    MissionKind::Mission => entry.missions.push(record),
                    MissionKind::Spare => entry.spares.push(record),
                }
                entry.stats.matched();
            }
            None => entry.stats.skipped(line),
        },
        PlanSection::Healing => {
            let windows = parse_healing_line(line);
            if windows.is_empty() {
                entry.stats.skipped(line);
            } else {
                entry.healing.extend(windows);
                entry.stats.matched();
            }
        }
        PlanSection::Hot | PlanSection::Cold => {
            if line.eq_ignore_ascii_case("nil") {
                entry.stats.skipped(line);
            } else {
                let list = if section == PlanSection::Hot {
                    &mut entry.hot
                } else {
                    &mut entry.cold
                };
                list.push(line.to_string());
                entry.stats.matched();
            }
        }
        PlanSection::Ops => {
            entry.ops.push(line.replace(';', ","));
            entry.stats.matched();
        }
        PlanSection::Notes => {
            entry.notes.push(line.to_string());
            entry.stats.matched();
        }
    }
}
