//! Mission/spare line classification for programme messages.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::{Code, MissionKind, MissionLine};
use crate::constants::BARE_MISSION_KEYWORDS;

/// Code at the start of the line, remainder after it
static CODE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([FfSs]\d)\b\s*(.*)$").unwrap());

/// Code anywhere in the line
static CODE_ANY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([FfSs]\d)\b").unwrap());

/// Time-range at the start of the remainder, normalized to "HHMM-HHMM"
static TIME_RANGE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\s*-\s*(\d{4})\s*(.*)$").unwrap());

/// The word "spare" with whatever word follows it
static SPARE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bspares?\b\s*(\w*)").unwrap());

/// Whether the text mentions spare aircraft, ignoring "spare window"
/// (which is healing terminology, not a spare tasking)
fn mentions_spare(text: &str) -> bool {
    SPARE_WORD
        .captures_iter(text)
        .any(|caps| !caps[1].eq_ignore_ascii_case("window"))
}

/// Parse one programme line into a mission or spare record.
///
/// Returns `None` for blank lines, bare "nil", and lines with no
/// recognizable mission shape.
pub fn parse_mission_line(line: &str) -> Option<MissionLine> {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("nil") {
        return None;
    }

    // "Nil Spare" is an explicit code-less spare record
    if line.to_lowercase().starts_with("nil spare") {
        return Some(MissionLine {
            kind: MissionKind::Spare,
            code: None,
            label: line.to_string(),
        });
    }

    // Bare mission-type abbreviations stand alone as code-less missions
    if BARE_MISSION_KEYWORDS
        .iter()
        .any(|kw| line.eq_ignore_ascii_case(kw))
    {
        return Some(MissionLine {
            kind: MissionKind::Mission,
            code: None,
            label: line.to_string(),
        });
    }

    if let Some(caps) = CODE_HEAD.captures(line) {
        let code = Code::from_str(&caps[1]).ok();
        let rest = caps[2].trim();

        if mentions_spare(rest) {
            // Spare lines keep the whole original text as their label
            return Some(MissionLine {
                kind: MissionKind::Spare,
                code,
                label: line.to_string(),
            });
        }

        let label = match TIME_RANGE_HEAD.captures(rest) {
            Some(time) => {
                let range = format!("{}-{}", &time[1], &time[2]);
                let tail = time[3].trim();
                if tail.is_empty() {
                    range
                } else {
                    format!("{range} {tail}")
                }
            }
            None => rest.to_string(),
        };
        return Some(MissionLine {
            kind: MissionKind::Mission,
            code,
            label,
        });
    }

    // A code anywhere plus "spare" still classifies as a spare for that code
    if mentions_spare(line) {
        if let Some(caps) = CODE_ANY.captures(line) {
            return Some(MissionLine {
                kind: MissionKind::Spare,
                code: Code::from_str(&caps[1]).ok(),
                label: line.to_string(),
            });
        }
    }

    None
}
