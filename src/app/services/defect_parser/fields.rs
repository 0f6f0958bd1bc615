//! Field extraction over one code's concatenated defect text.
//!
//! Extraction is independent per field: each known label is searched for in
//! the whole text, so messages can carry fields in any order and across any
//! number of blocks. The first occurrence of a single-line field wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::{Code, DefectRecord};

/// Single-line labels: `Label: value`
static SINGLE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(defect|rect|etr|work\s*cent(?:er|re)|w/c|prime|system)\s*:\s*(.*)$").unwrap()
});

/// GR/FCF headings: `GR:` with optional inline first item, or a bare `GR` line
static RUN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(gr|fcf)\s*(?::\s*(.*)|)$").unwrap());

/// A standalone Recovery line
static RECOVERY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^recovery\s*$").unwrap());

/// "post phase rcv" anywhere also flags recovery
static POST_PHASE_RCV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)post phase rcv").unwrap());

/// The U/S token, tolerant of straight and curly quote characters around it
static US_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)["'“”‘’]*u/s["'“”‘’]*"#).unwrap());

/// A known field label found at the start of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLabel {
    Defect,
    Rect,
    Etr,
    Gr,
    Fcf,
    Workcenter,
    Prime,
    System,
}

/// Classify a line as a known label with its same-line remainder.
///
/// Any label line terminates a multi-line capture, which is why this is one
/// shared function rather than per-field patterns scattered through the
/// extraction loop.
pub fn classify_label(line: &str) -> Option<(FieldLabel, String)> {
    if let Some(caps) = SINGLE_LABEL.captures(line) {
        let label = match caps[1].to_lowercase().replace(' ', "").as_str() {
            "defect" => FieldLabel::Defect,
            "rect" => FieldLabel::Rect,
            "etr" => FieldLabel::Etr,
            "prime" => FieldLabel::Prime,
            "system" => FieldLabel::System,
            // workcenter / work center / work centre / w/c
            _ => FieldLabel::Workcenter,
        };
        return Some((label, caps[2].trim().to_string()));
    }

    if let Some(caps) = RUN_LABEL.captures(line) {
        let label = if caps[1].eq_ignore_ascii_case("gr") {
            FieldLabel::Gr
        } else {
            FieldLabel::Fcf
        };
        let rest = caps.get(2).map(|m| m.as_str().trim().to_string());
        return Some((label, rest.unwrap_or_default()));
    }

    None
}

/// Whether a line ends a multi-line capture
fn is_boundary(line: &str) -> bool {
    classify_label(line).is_some() || RECOVERY_LINE.is_match(line)
}

/// Strip a leading bullet marker from a requirement item line
fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', '•', '>', ' ', '\t']).trim()
}

/// Keep a value only if the field has not been set yet (first match wins)
fn set_once(field: &mut String, value: String) {
    if field.is_empty() && !value.is_empty() {
        *field = value;
    }
}

/// Extract every field from one code's concatenated block text
pub fn extract(code: Code, blob: &str) -> DefectRecord {
    let mut record = DefectRecord::new(code);

    if POST_PHASE_RCV.is_match(blob) {
        record.recovery = true;
    }

    let lines: Vec<&str> = blob.lines().map(str::trim).collect();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if RECOVERY_LINE.is_match(line) {
            record.recovery = true;
            i += 1;
            continue;
        }

        let classified = classify_label(line);

        // Label lines are never U/S lines, even when their value text
        // happens to contain the token
        if classified.is_none() && record.us.is_empty() && !line.is_empty() && US_TOKEN.is_match(line)
        {
            let cleaned = US_TOKEN.replace_all(line, " ");
            let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
            if !cleaned.is_empty() {
                record.us = cleaned;
                i += 1;
                continue;
            }
        }

        let Some((label, rest)) = classified else {
            i += 1;
            continue;
        };

        match label {
            FieldLabel::Rect => set_once(&mut record.rect, rest),
            FieldLabel::Etr => set_once(&mut record.etr, rest),
            FieldLabel::Workcenter => set_once(&mut record.workcenter, rest),
            FieldLabel::Prime => set_once(&mut record.prime, rest),
            FieldLabel::System => set_once(&mut record.system, rest),
            FieldLabel::Defect => {
                // Multi-line: runs to the next known label or a blank line
                let mut parts = Vec::new();
                if !rest.is_empty() {
                    parts.push(rest);
                }
                while i + 1 < lines.len() {
                    let next = lines[i + 1];
                    if next.is_empty() || is_boundary(next) {
                        break;
                    }
                    parts.push(next.to_string());
                    i += 1;
                }
                set_once(&mut record.defect, parts.join("\n"));
            }
            FieldLabel::Gr | FieldLabel::Fcf => {
                // Multi-line: runs to the next known label or end of text;
                // blank items are dropped, not terminating
                let mut items = Vec::new();
                if !rest.is_empty() {
                    items.push(rest);
                }
                while i + 1 < lines.len() {
                    let next = lines[i + 1];
                    if is_boundary(next) {
                        break;
                    }
                    let item = strip_bullet(next);
                    if !item.is_empty() {
                        items.push(item.to_string());
                    }
                    i += 1;
                }
                let target = if label == FieldLabel::Gr {
                    &mut record.gr
                } else {
                    &mut record.fcf
                };
                if target.is_empty() {
                    *target = items;
                }
            }
        }
        i += 1;
    }

    record
}
