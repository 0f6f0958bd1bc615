//! Structured handover document model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Code, ScanStats};

/// Outstanding work for one aircraft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutstandingEntry {
    /// Short parenthesized annotation from the code line, e.g. "(MC)"
    pub tag: Option<String>,

    /// Outstanding item lines in document order
    pub items: Vec<String>,
}

/// The twelve auxiliary handover sections.
///
/// Every field is an ordered list of free-text lines; section membership is
/// decided purely by the most recently seen section header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraSections {
    /// 25-hour servicing projection
    pub proj_25hr: Vec<String>,

    /// 50-hour servicing projection
    pub proj_50hr: Vec<String>,

    /// 100-hour servicing projection
    pub proj_100hr: Vec<String>,

    /// 200-hour servicing projection
    pub proj_200hr: Vec<String>,

    /// Phase servicing status
    pub phase: Vec<String>,

    /// Wheel and tyre status
    pub wheels: Vec<String>,

    /// Engine status
    pub engines: Vec<String>,

    /// Aerospace ground equipment status
    pub age: Vec<String>,

    /// Tool control status
    pub tools: Vec<String>,

    /// Fuel status
    pub fuel: Vec<String>,

    /// Armament status
    pub armament: Vec<String>,

    /// Lessons learned
    pub lessons: Vec<String>,
}

/// A parsed shift-change handover document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandoverDocument {
    /// Completed work items keyed by aircraft code
    pub completed: BTreeMap<Code, Vec<String>>,

    /// Outstanding work keyed by aircraft code
    pub outstanding: BTreeMap<Code, OutstandingEntry>,

    /// The twelve auxiliary sections
    pub extra: ExtraSections,

    /// Line-level scan statistics
    pub stats: ScanStats,
}
