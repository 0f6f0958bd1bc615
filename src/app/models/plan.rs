//! Daily and weekly flying-programme model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Code, ScanStats};

/// Whether a programme line is a tasked mission or a spare aircraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionKind {
    Mission,
    Spare,
}

/// One mission or spare line from the programme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionLine {
    /// Mission or spare
    pub kind: MissionKind,

    /// Tasked aircraft, when the line named one
    pub code: Option<Code>,

    /// Display label: time-range and remarks for missions, the original
    /// line text for spares
    pub label: String,
}

/// A scheduled maintenance (healing) window for one aircraft.
///
/// One record per distinct time-range found on a healing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealingWindow {
    /// Aircraft the window belongs to, when the line named one
    pub code: Option<Code>,

    /// Time-range text, plus any trailing remarks on the last window of a line
    pub label: String,
}

/// One day of the flying programme, from a daily message or one day-block of
/// a weekly paste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatePlanEntry {
    /// Resolved calendar date; `None` when the header did not parse
    pub date_iso: Option<NaiveDate>,

    /// Cleaned header text, the display fallback when `date_iso` is `None`
    pub date_label: String,

    /// Tasked missions in document order
    pub missions: Vec<MissionLine>,

    /// Spare aircraft in document order
    pub spares: Vec<MissionLine>,

    /// Healing windows in document order
    pub healing: Vec<HealingWindow>,

    /// Hot-refuel lines
    pub hot: Vec<String>,

    /// Cold-refuel lines
    pub cold: Vec<String>,

    /// Ops brief lines, semicolons normalized to commas
    pub ops: Vec<String>,

    /// Free-text notes
    pub notes: Vec<String>,

    /// Line-level scan statistics
    pub stats: ScanStats,
}
