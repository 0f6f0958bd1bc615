//! Core handover parsing.
//!
//! Single pass; state is the open section plus, inside completed and
//! outstanding, the open aircraft code. Each section boundary is purely
//! header-triggered.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::section::{Section, classify_header};
use crate::app::models::{Code, HandoverDocument, OutstandingEntry};

/// A code line opening one aircraft's items: code, then an optional
/// parenthesized short tag
static CODE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([FfSs]\d)\b\s*(?:\(([^)]*)\))?").unwrap());

/// Scan state threaded through the fold over lines
struct ScanState {
    doc: HandoverDocument,
    section: Option<Section>,
    current_code: Option<Code>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            doc: HandoverDocument::default(),
            section: None,
            current_code: None,
        }
    }

    fn push_item(&mut self, code: Code, section: Section, item: String) {
        match section {
            Section::Completed => self.doc.completed.entry(code).or_default().push(item),
            Section::Outstanding => {
                self.doc
                    .outstanding
                    .entry(code)
                    .or_default()
                    .items
                    .push(item);
            }
            Section::Extra(_) => unreachable!("extra sections have no code"),
        }
    }
}

/// Strip one leading bullet marker, preserving a normalized `"> "` prefix
/// for sub-items that used the arrow marker
fn strip_item_marker(line: &str) -> Option<String> {
    if let Some(rest) = line.strip_prefix('>') {
        return Some(format!("> {}", rest.trim()));
    }
    for marker in ['-', '\u{2022}'] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest.trim_start_matches(marker).trim().to_string());
        }
    }
    None
}

/// Strip leading bullet/arrow markers from an auxiliary-section line
fn strip_extra_markers(line: &str) -> &str {
    line.trim_start_matches(['-', '\u{2022}', '>', '\u{2192}', ' ', '\t'])
        .trim()
}

/// Parse a handover document.
///
/// Never fails: lines before any header, and lines under no open code
/// inside completed/outstanding, are dropped and counted in the result's
/// stats.
pub fn parse_handover(text: &str) -> HandoverDocument {
    let mut state = ScanState::new();

    for raw in text.replace("\r\n", "\n").lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(section) = classify_header(line) {
            // The header line itself is not stored as data
            state.section = Some(section);
            state.current_code = None;
            state.doc.stats.matched();
            continue;
        }

        let Some(section) = state.section else {
            state.doc.stats.skipped(line);
            continue;
        };

        match section {
            Section::Extra(kind) => {
                kind.list_mut(&mut state.doc.extra)
                    .push(strip_extra_markers(line).to_string());
                state.doc.stats.matched();
            }
            Section::Completed | Section::Outstanding => {
                if let Some(caps) = CODE_LINE.captures(line) {
                    // The capture is constrained to [FfSs]\d
                    let code = Code::from_str(&caps[1]).expect("valid code capture");
                    state.current_code = Some(code);
                    if section == Section::Outstanding {
                        let tag = caps.get(2).map(|m| m.as_str().trim().to_string());
                        state.doc.outstanding.entry(code).or_default().tag = tag;
                    } else {
                        state.doc.completed.entry(code).or_default();
                    }
                    state.doc.stats.matched();
                    continue;
                }

                let Some(code) = state.current_code else {
                    state.doc.stats.skipped(line);
                    continue;
                };

                // Continuation lines without a marker are still items
                let item = strip_item_marker(line).unwrap_or_else(|| line.to_string());
                state.push_item(code, section, item);
                state.doc.stats.matched();
            }
        }
    }

    debug!(
        completed = state.doc.completed.len(),
        outstanding = state.doc.outstanding.len(),
        skipped = state.doc.stats.skipped,
        "parsed handover"
    );

    state.doc
}
