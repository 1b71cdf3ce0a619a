//! Error types for the NEO export library
//!
//! This module defines all error types that can occur while serializing
//! close approaches. Errors are designed to be descriptive enough to surface
//! directly to a user.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Path not writable, permission denied, disk full, etc.
//! - **Encoding Errors**: CSV or JSON encoding/decoding failures
//! - **Record Errors**: Input records that violate the data model
//! - **Configuration Errors**: Datetime patterns chrono cannot render

use thiserror::Error;

/// Main error type for the export library
///
/// None of these errors are recovered internally. A failure part way through
/// a CSV write leaves a truncated file behind; cleaning it up is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// I/O error occurred while creating, writing or flushing a file
    #[error("I/O error on '{path}': {message}")]
    IoError {
        /// Path of the file being written (empty for in-memory writers)
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// CSV encoding or decoding error
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV error
        message: String,
    },

    /// JSON encoding or decoding error
    #[error("JSON error: {message}")]
    JsonError {
        /// Description of the JSON error
        message: String,
    },

    /// An input record cannot be serialized
    ///
    /// `index` is the zero-based position of the record in the input sequence.
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the offending record
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// A strftime pattern contains specifiers chrono cannot render
    #[error("Invalid datetime format '{pattern}'")]
    InvalidDatetimeFormat {
        /// The rejected pattern
        pattern: String,
    },
}

// Conversion from io::Error to ExportError
impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::IoError {
            path: String::new(),
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ExportError
impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return ExportError::IoError {
                path: String::new(),
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        ExportError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to ExportError
impl From<serde_json::Error> for ExportError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return ExportError::IoError {
                path: String::new(),
                message: error.to_string(),
            };
        }

        ExportError::JsonError {
            message: error.to_string(),
        }
    }
}

impl ExportError {
    /// Create an IoError for a specific path
    pub fn io(path: &std::path::Path, error: std::io::Error) -> Self {
        ExportError::IoError {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create an InvalidRecord error
    pub fn invalid_record(index: usize, reason: &str) -> Self {
        ExportError::InvalidRecord {
            index,
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidDatetimeFormat error
    pub fn invalid_datetime_format(pattern: &str) -> Self {
        ExportError::InvalidDatetimeFormat {
            pattern: pattern.to_string(),
        }
    }

    /// Attach a file path to an I/O error that was raised without one
    ///
    /// Errors of other kinds are returned unchanged.
    pub fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            ExportError::IoError { path: p, message } if p.is_empty() => ExportError::IoError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        }
    }
}
