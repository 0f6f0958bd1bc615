//! Configuration for the parsing layer.
//!
//! The parsers are pure functions over text; the only tunable is how
//! year-less date headers are resolved, which would otherwise depend on the
//! wall clock and make parses non-reproducible in tests.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Parser configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Year assumed for date headers that omit one.
    ///
    /// `None` falls back to the current local year.
    pub default_year: Option<i32>,
}

impl ParserConfig {
    /// Create a configuration pinned to a specific fallback year
    pub fn with_year(year: i32) -> Self {
        Self {
            default_year: Some(year),
        }
    }

    /// The year applied to date headers without an explicit year
    pub fn fallback_year(&self) -> i32 {
        self.default_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_year() {
        let config = ParserConfig::with_year(2025);
        assert_eq!(config.fallback_year(), 2025);
    }

    #[test]
    fn test_default_uses_current_year() {
        let config = ParserConfig::default();
        let now = chrono::Local::now().year();
        assert_eq!(config.fallback_year(), now);
    }
}
