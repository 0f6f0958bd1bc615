//! Status classification for Night Report entries.
//!
//! Derives a priority-ordered status category from an entry's free text.
//! This is pattern recognition only: the classifier looks for fixed tokens,
//! never at the meaning of the surrounding narrative.

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::{ReportEntry, StatusTag};

// Standalone-word tests; plain substring search would also match "degrade"
// and "phased".
static WORD_GR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bgr\b").unwrap());
static WORD_PHASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bphase\b").unwrap());

/// Classify an entry from its title and notes.
///
/// Priority order, first match wins:
/// 1. defect signal ("defect:", "rect:", or the word "gr" in title or notes)
///    -> rectification
/// 2. in-phase signal ("major serv" or the word "phase", title only)
///    -> in-phase
/// 3. recovery signal ("post phase rcv" or "recovery", title or notes)
///    -> recovery
/// 4. otherwise serviceable
///
/// The in-phase signal deliberately ignores notes: incidental mentions of
/// "phase" in narrative notes must not reclassify a serviceable aircraft.
pub fn classify(title: &str, notes: &[String]) -> StatusTag {
    let title = title.to_lowercase();
    let notes = notes.join("\n").to_lowercase();

    let has_defect = |text: &str| {
        text.contains("defect:") || text.contains("rect:") || WORD_GR.is_match(text)
    };
    if has_defect(&title) || has_defect(&notes) {
        return StatusTag::Rectification;
    }

    if title.contains("major serv") || WORD_PHASE.is_match(&title) {
        return StatusTag::InPhase;
    }

    let has_recovery = |text: &str| text.contains("post phase rcv") || text.contains("recovery");
    if has_recovery(&title) || has_recovery(&notes) {
        return StatusTag::Recovery;
    }

    StatusTag::Serviceable
}

/// Classify an entry in place
pub fn tag_entry(entry: &mut ReportEntry) {
    entry.tag = classify(&entry.title, &entry.notes);
}
