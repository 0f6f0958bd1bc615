//! Core Night Report parsing.
//!
//! Single pass over the document lines: a header line opens an entry and
//! becomes the current code; field and note lines mutate the current entry;
//! everything else is dropped. Tags are derived once the whole document has
//! been scanned.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::line_kind::{LineKind, classify};
use crate::app::models::{Code, ReportEntry, ScanStats};
use crate::app::services::status;

/// A parsed Night Report document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NightReport {
    /// Entries keyed by aircraft code
    pub entries: BTreeMap<Code, ReportEntry>,

    /// Line-level scan statistics
    pub stats: ScanStats,
}

/// Scan state threaded through the fold over lines
struct ScanState {
    entries: BTreeMap<Code, ReportEntry>,
    current: Option<Code>,
    stats: ScanStats,
}

impl ScanState {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            current: None,
            stats: ScanStats::default(),
        }
    }

    fn open_entry(&mut self, code: Code, tail: &str) {
        let title = format!("{code} - {tail}");
        // A repeated header for the same code starts the entry over
        self.entries.insert(code, ReportEntry::new(code, title));
        self.current = Some(code);
        self.stats.matched();
    }

    fn current_entry(&mut self) -> Option<&mut ReportEntry> {
        self.current.and_then(|code| self.entries.get_mut(&code))
    }
}

/// Parse a Night Report document into per-code entries.
///
/// Never fails: lines that match no pattern, or that appear before the
/// first header, are dropped and counted in the result's stats.
pub fn parse_night_report(text: &str) -> NightReport {
    let mut state = ScanState::new();

    for raw in text.replace("\r\n", "\n").lines() {
        let kind = classify(raw);

        if let LineKind::Header { code, tail } = kind {
            state.open_entry(code, &tail);
            continue;
        }

        if matches!(kind, LineKind::Blank) {
            continue;
        }

        // Pre-header noise is discarded
        if state.current.is_none() {
            state.stats.skipped(raw.trim());
            continue;
        }

        let Some(entry) = state.current_entry() else {
            continue;
        };

        match kind {
            // Later occurrences overwrite: last write wins
            LineKind::Input(value) => entry.input = Some(value),
            LineKind::Etr(value) => entry.etr = Some(value),
            LineKind::SubItem(text) | LineKind::Note(text) => entry.notes.push(text),
            LineKind::Requirements => entry.notes.push("Requirements:".to_string()),
            LineKind::Other => {
                // Unrecognized lines under a code are not notes
                state.stats.skipped(raw.trim());
                continue;
            }
            LineKind::Header { .. } | LineKind::Blank => unreachable!(),
        }
        state.stats.matched();
    }

    for entry in state.entries.values_mut() {
        status::tag_entry(entry);
    }

    debug!(
        entries = state.entries.len(),
        skipped = state.stats.skipped,
        "parsed night report"
    );

    NightReport {
        entries: state.entries,
        stats: state.stats,
    }
}
