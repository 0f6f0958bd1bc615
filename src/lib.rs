//! Shiftlog Processor Library
//!
//! A Rust library for turning pasted, loosely formatted shift-operations text
//! into structured per-aircraft records.
//!
//! This library provides tools for:
//! - Parsing Night Report documents into per-code entries with status tags
//! - Splitting pasted defect-update messages into structured defect records
//! - Parsing handover documents into completed/outstanding work plus
//!   auxiliary status sections
//! - Parsing daily and weekly flying-programme text into missions, spares,
//!   and healing windows
//!
//! All parsers are pure, single-pass, and never fail on malformed input:
//! unrecognized structure is dropped and reported through per-parse scan
//! statistics rather than raised as an error.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod date_plan;
        pub mod defect_parser;
        pub mod handover_parser;
        pub mod report_parser;
        pub mod status;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Code, ReportEntry, ScanStats, StatusTag};
pub use config::ParserConfig;

/// Result type alias for the shiftlog processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the CLI layer.
///
/// The parsers themselves never error: unrecognized input is silently
/// skipped. These variants cover the thin layer around them, reading input
/// text and writing rendered output.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
