//! Night Report parser.
//!
//! A Night Report is a single pasted document listing one header line per
//! aircraft code followed by that aircraft's `Input:`/`ETR:` fields and
//! bulleted notes. The parser is a line-oriented single pass with one
//! mutable "current code" pointer and no backtracking across entries.
//!
//! ## Architecture
//!
//! - [`line_kind`] - the line classifier: one reviewable unit deciding what
//!   counts as a header, a field, or a note
//! - [`parser`] - the fold over lines that builds entries and derives tags

pub mod line_kind;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use line_kind::LineKind;
pub use parser::{NightReport, parse_night_report};
