//! Line classification for Night Report documents.
//!
//! Isolates the "what counts as a header" policy into one testable unit.
//! Every line of a report maps to exactly one [`LineKind`]; the parser fold
//! decides what each kind means given the current scan state.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::Code;

/// Header line: optional leading markers (`>`, `*`, `-`, whitespace), an
/// optional asterisk, a code, a required `-` separator, then free text.
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[>*\-\s]*\*?\s*([FfSs]\d)\s*-\s*(.*)$").unwrap());

static INPUT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^input:\s*(.+)$").unwrap());
static ETR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^etr:\s*(.+)$").unwrap());

/// What one trimmed report line is
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Starts a new entry for `code`; `tail` is the text after the separator
    Header { code: Code, tail: String },

    /// `Input:` field value
    Input(String),

    /// `ETR:` field value
    Etr(String),

    /// `>`-prefixed sub-item, marker stripped
    SubItem(String),

    /// `-`-prefixed note, marker(s) stripped
    Note(String),

    /// The literal section word `Requirements`
    Requirements,

    /// Empty after trimming
    Blank,

    /// No pattern claimed the line
    Other,
}

/// Classify one line of a Night Report
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(caps) = HEADER.captures(line) {
        // The capture is constrained to [FfSs]\d, so FromStr cannot fail
        if let Ok(code) = Code::from_str(&caps[1]) {
            return LineKind::Header {
                code,
                tail: caps[2].trim().to_string(),
            };
        }
    }

    if let Some(caps) = INPUT.captures(line) {
        return LineKind::Input(caps[1].trim().to_string());
    }

    if let Some(caps) = ETR.captures(line) {
        return LineKind::Etr(caps[1].trim().to_string());
    }

    if let Some(rest) = line.strip_prefix('>') {
        return LineKind::SubItem(rest.trim().to_string());
    }

    if line.starts_with('-') {
        return LineKind::Note(line.trim_start_matches('-').trim().to_string());
    }

    if line.eq_ignore_ascii_case("requirements") {
        return LineKind::Requirements;
    }

    LineKind::Other
}
