//! Core data structures shared by every parser.
//!
//! Defines the aircraft `Code` join key, the placeholder-id codec, derived
//! status tags, Night Report entries, and the scan statistics every parse
//! result carries.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::constants::{
    PLACEHOLDER_F_BASE, PLACEHOLDER_F_RANGE, PLACEHOLDER_S_BASE, PLACEHOLDER_S_RANGE,
};

pub mod defect;
pub mod handover;
pub mod plan;

pub use defect::{DefectParse, DefectRecord};
pub use handover::{ExtraSections, HandoverDocument, OutstandingEntry};
pub use plan::{DatePlanEntry, HealingWindow, MissionKind, MissionLine};

/// Letter class of an aircraft code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CodeClass {
    F,
    S,
}

impl CodeClass {
    /// The letter this class renders as
    pub fn letter(self) -> char {
        match self {
            CodeClass::F => 'F',
            CodeClass::S => 'S',
        }
    }
}

/// Two-character aircraft identifier: letter class F/S plus a single digit.
///
/// Codes are the universal join key across all parsers. Input is
/// case-insensitive; the internal form is always uppercase. Ordering is
/// class-then-digit, which gives the deterministic display order the
/// presentation layer sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    pub class: CodeClass,
    pub digit: u8,
}

impl Code {
    /// Build a code, returning `None` for digits above 9
    pub fn new(class: CodeClass, digit: u8) -> Option<Self> {
        (digit <= 9).then_some(Self { class, digit })
    }

    /// Map a placeholder id onto its code.
    ///
    /// Ids 251-259 map to F1-F9 and 260-269 to S0-S9; anything outside the
    /// two ranges has no code.
    pub fn from_placeholder(id: u16) -> Option<Self> {
        if (PLACEHOLDER_F_RANGE.0..=PLACEHOLDER_F_RANGE.1).contains(&id) {
            Code::new(CodeClass::F, (id - PLACEHOLDER_F_BASE) as u8)
        } else if (PLACEHOLDER_S_RANGE.0..=PLACEHOLDER_S_RANGE.1).contains(&id) {
            Code::new(CodeClass::S, (id - PLACEHOLDER_S_BASE) as u8)
        } else {
            None
        }
    }

    /// The placeholder id this code occupies (range inverse of
    /// [`Code::from_placeholder`])
    pub fn placeholder(&self) -> u16 {
        match self.class {
            CodeClass::F => PLACEHOLDER_F_BASE + u16::from(self.digit),
            CodeClass::S => PLACEHOLDER_S_BASE + u16::from(self.digit),
        }
    }
}

/// Render a placeholder id for display.
///
/// Total function: ids inside the two code ranges render as their code
/// ("F2", "S0"); anything else passes through as its decimal string.
pub fn placeholder_label(id: u16) -> String {
    match Code::from_placeholder(id) {
        Some(code) => code.to_string(),
        None => id.to_string(),
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class.letter(), self.digit)
    }
}

impl FromStr for Code {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let class = match chars.next() {
            Some('F') | Some('f') => CodeClass::F,
            Some('S') | Some('s') => CodeClass::S,
            _ => return Err(()),
        };
        let digit = match chars.next().and_then(|c| c.to_digit(10)) {
            Some(d) => d as u8,
            None => return Err(()),
        };
        if chars.next().is_some() {
            return Err(());
        }
        Code::new(class, digit).ok_or(())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = Code;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an aircraft code like F2 or S3")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Code, E> {
                Code::from_str(v).map_err(|_| E::custom(format!("invalid code '{v}'")))
            }
        }

        deserializer.deserialize_str(CodeVisitor)
    }
}

/// Derived operational status of one code's Night Report entry.
///
/// Never stored: always recomputed from an entry's title and notes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusTag {
    Rectification,
    InPhase,
    Recovery,
    Serviceable,
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusTag::Rectification => "rectification",
            StatusTag::InPhase => "in-phase",
            StatusTag::Recovery => "recovery",
            StatusTag::Serviceable => "serviceable",
        };
        f.write_str(s)
    }
}

/// One aircraft's entry in a Night Report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Aircraft code this entry belongs to
    pub code: Code,

    /// Full header line text, "{code} - {tail}"
    pub title: String,

    /// Input timestamp text, if an `Input:` line was present
    pub input: Option<String>,

    /// Estimated-time-ready text, if an `ETR:` line was present
    pub etr: Option<String>,

    /// Free-text note lines in document order
    pub notes: Vec<String>,

    /// Status derived from title and notes after the full scan
    pub tag: StatusTag,
}

impl ReportEntry {
    /// Start a fresh entry for a header line
    pub fn new(code: Code, title: String) -> Self {
        Self {
            code,
            title,
            input: None,
            etr: None,
            notes: Vec::new(),
            tag: StatusTag::Serviceable,
        }
    }
}

/// Scan statistics carried by every parse result.
///
/// "Empty result" and "parse found nothing" are the same thing to callers;
/// these counters are the diagnostic channel that tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Non-empty lines (or blocks) examined
    pub scanned: usize,

    /// Lines that matched a known pattern and contributed to the result
    pub matched: usize,

    /// Lines dropped because no pattern claimed them
    pub skipped: usize,

    /// The dropped lines, verbatim, for coverage assertions
    pub skipped_lines: Vec<String>,
}

impl ScanStats {
    /// Record a line that contributed to the result
    pub fn matched(&mut self) {
        self.scanned += 1;
        self.matched += 1;
    }

    /// Record a dropped line
    pub fn skipped(&mut self, line: &str) {
        self.scanned += 1;
        self.skipped += 1;
        self.skipped_lines.push(line.to_string());
    }
}
