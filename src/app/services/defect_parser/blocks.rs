//! Blank-line block splitting and per-code grouping for defect updates.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::{Code, ScanStats};

static BLOCK_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

static BARE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([FfSs]\d)\s*$").unwrap());

/// Split pasted text into trimmed, non-empty blocks on runs of 2+ newlines
pub fn split_blocks(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    BLOCK_SEPARATOR
        .split(&normalized)
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect()
}

/// A block consisting solely of a bare code, if this one is
pub fn bare_code(block: &str) -> Option<Code> {
    BARE_CODE
        .captures(block)
        .and_then(|caps| Code::from_str(&caps[1]).ok())
}

/// Group blocks under the bare-code block most recently seen.
///
/// The code-only block itself is kept in its group so the concatenated text
/// still carries it. Blocks before any code are dropped and counted.
pub fn group_by_code(text: &str) -> (BTreeMap<Code, Vec<String>>, ScanStats) {
    let mut grouped: BTreeMap<Code, Vec<String>> = BTreeMap::new();
    let mut current: Option<Code> = None;
    let mut stats = ScanStats::default();

    for block in split_blocks(text) {
        if let Some(code) = bare_code(&block) {
            current = Some(code);
        }
        match current {
            Some(code) => {
                grouped.entry(code).or_default().push(block);
                stats.matched();
            }
            None => stats.skipped(&block),
        }
    }

    (grouped, stats)
}
