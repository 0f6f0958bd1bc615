//! Daily and weekly flying-programme parser.
//!
//! A daily programme message opens with a date header, lists missions and
//! spare aircraft, then optional `Healing`, `Hot`, `Cold`, `Ops Brief`, and
//! `Notes` sections. A weekly paste is the same thing repeated, one block
//! per date header. Both entry points share every sub-parser.
//!
//! ## Architecture
//!
//! - [`date_header`] - month-name date resolution and header detection
//! - [`mission`] - mission/spare line classification
//! - [`healing`] - healing-window time-range extraction
//! - [`daily`] - the section state machine over one day's lines
//! - [`weekly`] - day-block splitting feeding the daily parser

pub mod daily;
pub mod date_header;
pub mod healing;
pub mod mission;
pub mod weekly;

#[cfg(test)]
pub mod tests;

pub use daily::parse_daily;
pub use weekly::parse_weekly;
