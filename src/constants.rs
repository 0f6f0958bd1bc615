//! Application constants for the shiftlog processor
//!
//! This module contains the fixed identifier ranges, month-name lookup data,
//! and keyword sets shared by the parsers.

// =============================================================================
// Placeholder Identifiers
// =============================================================================

/// Base offset for F-class placeholder ids (251-259 map to F1-F9)
pub const PLACEHOLDER_F_BASE: u16 = 250;

/// Inclusive range of F-class placeholder ids
pub const PLACEHOLDER_F_RANGE: (u16, u16) = (251, 259);

/// Base offset for S-class placeholder ids (260-269 map to S0-S9)
pub const PLACEHOLDER_S_BASE: u16 = 260;

/// Inclusive range of S-class placeholder ids
pub const PLACEHOLDER_S_RANGE: (u16, u16) = (260, 269);

/// Placeholder ids for the current fleet, in display order
pub const FLEET_PLACEHOLDER_IDS: &[u16] = &[252, 253, 260, 261, 263, 264, 265, 266];

// =============================================================================
// Date Headers
// =============================================================================

/// Month-name prefixes accepted in date headers, 1-indexed by position.
///
/// Matching is by prefix, so both "Aug" and "August" resolve to month 8.
/// Three letters is the minimum the date-header scanner accepts.
pub const MONTH_PREFIXES: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

// =============================================================================
// Plan Sections
// =============================================================================

/// Mission-type abbreviations that stand alone as code-less mission lines
pub const BARE_MISSION_KEYWORDS: &[&str] = &["GH", "FCF"];
