//! Structured defect records extracted from pasted defect-update messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Code, ScanStats};

/// One aircraft's defect state, built from all message blocks pasted for it.
///
/// Fields are extracted independently from the concatenated block text, so
/// they are neither mutually exclusive nor order-dependent. Missing fields
/// stay at their empty defaults - never null or absent - and downstream
/// rendering treats the empty string as "no value".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    /// Aircraft code this record belongs to
    pub code: Code,

    /// Date/time the aircraft went unserviceable
    pub us: String,

    /// Defect description, possibly gathered across lines
    pub defect: String,

    /// Rectification text
    pub rect: String,

    /// Estimated time ready
    pub etr: String,

    /// Whether the aircraft is in post-phase recovery
    pub recovery: bool,

    /// Ground-run requirement lines, in document order
    pub gr: Vec<String>,

    /// Flight-check-flight requirement lines, in document order
    pub fcf: Vec<String>,

    /// Owning workcenter
    pub workcenter: String,

    /// Prime tradesman
    pub prime: String,

    /// Affected system
    pub system: String,
}

impl DefectRecord {
    /// An empty record for a code, all fields at their defaults
    pub fn new(code: Code) -> Self {
        Self {
            code,
            us: String::new(),
            defect: String::new(),
            rect: String::new(),
            etr: String::new(),
            recovery: false,
            gr: Vec::new(),
            fcf: Vec::new(),
            workcenter: String::new(),
            prime: String::new(),
            system: String::new(),
        }
    }
}

/// Result of parsing a pasted multi-message defect update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefectParse {
    /// Records keyed by aircraft code
    pub by_code: BTreeMap<Code, DefectRecord>,

    /// Block-level scan statistics
    pub stats: ScanStats,
}
