//! Defect-update message parser.
//!
//! Input is a paste of one or more messages separated by blank lines. A
//! block that is nothing but a bare aircraft code opens an accumulator;
//! every following block belongs to that code until the next bare-code
//! block. Field extraction then runs independently over each code's
//! concatenated text, so field order inside the messages does not matter.
//!
//! ## Architecture
//!
//! - [`blocks`] - blank-line block splitting and per-code grouping
//! - [`fields`] - label classification and field extraction over one
//!   code's concatenated text

pub mod blocks;
pub mod fields;

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::app::models::{DefectParse, DefectRecord};

pub use blocks::split_blocks;

/// Parse pasted defect-update text into per-code records.
///
/// Never fails: blocks before the first bare-code block are dropped and
/// counted; unmatched fields stay at their empty defaults.
pub fn parse_defect_messages(text: &str) -> DefectParse {
    let (grouped, stats) = blocks::group_by_code(text);

    let mut parse = DefectParse {
        stats,
        ..DefectParse::default()
    };

    for (code, code_blocks) in grouped {
        let blob = code_blocks.join("\n\n");
        let record: DefectRecord = fields::extract(code, &blob);
        parse.by_code.insert(code, record);
    }

    debug!(
        codes = parse.by_code.len(),
        skipped = parse.stats.skipped,
        "parsed defect messages"
    );

    parse
}
