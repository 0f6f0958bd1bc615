//! Handover document parser.
//!
//! A handover is a symbol-marked shift-change document: a completed-work
//! section and an outstanding-work section (both keyed by aircraft code),
//! plus twelve auxiliary free-text sections. Section membership is decided
//! purely by the most recently seen section header; there is no lookahead.
//!
//! ## Architecture
//!
//! - [`section`] - the fourteen fixed header patterns in one place
//! - [`parser`] - the line state machine (current section + current code)

pub mod parser;
pub mod section;

#[cfg(test)]
pub mod tests;

pub use parser::parse_handover;
pub use section::{ExtraKind, Section};
