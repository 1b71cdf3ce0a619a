//! Export strategy module
//!
//! This module defines the Strategy pattern for writing close approaches to a
//! file. Each strategy owns one output format: it opens the destination,
//! delegates the encoding to the `io` module, and closes the file on every
//! exit path. Which strategy to use is decided by the caller.

use crate::io::datetime::{is_valid_pattern, DEFAULT_DATETIME_FORMAT};
use crate::io::JsonStyle;
use crate::types::{CloseApproach, ExportError};
use std::fmt;
use std::path::Path;

pub mod csv_writer;
pub mod json_writer;

pub use csv_writer::CsvApproachWriter;
pub use json_writer::JsonApproachWriter;

/// Supported output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Configuration shared by the export strategies
#[derive(Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// strftime pattern for the `datetime_utc` field
    pub datetime_format: String,
    /// Layout of JSON documents (ignored for CSV)
    pub json_style: JsonStyle,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            json_style: JsonStyle::default(),
        }
    }
}

impl ExportConfig {
    /// Create a new ExportConfig with custom values
    ///
    /// A datetime pattern chrono cannot render is replaced by the default,
    /// with a warning.
    pub fn new(datetime_format: &str, json_style: JsonStyle) -> Self {
        let default = Self::default();

        let datetime_format = if is_valid_pattern(datetime_format) {
            datetime_format.to_string()
        } else {
            log::warn!(
                "Invalid datetime_format ({:?}), using default ({:?})",
                datetime_format,
                default.datetime_format
            );
            default.datetime_format
        };

        Self {
            datetime_format,
            json_style,
        }
    }
}

/// Export strategy trait
///
/// Implementations write every approach yielded by `approaches` to the file
/// at `path`, creating or truncating it. Writers hold no mutable state, so a
/// single instance can be reused for any number of exports.
pub trait ApproachWriter: Send + Sync {
    /// The format this writer produces
    fn format(&self) -> OutputFormat;

    /// Write approaches to `path`
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of approaches written
    /// * `Err(ExportError)` - The file could not be written or a record was invalid
    fn write(
        &self,
        approaches: &mut dyn Iterator<Item = &CloseApproach>,
        path: &Path,
    ) -> Result<usize, ExportError>;
}

/// Create an export strategy for the specified format
///
/// # Arguments
///
/// * `format` - Output format to produce
/// * `config` - Optional configuration (defaults are used when `None`)
///
/// # Returns
///
/// A boxed trait object implementing the ApproachWriter trait, or
/// `ExportError::InvalidDatetimeFormat` if the configured pattern is invalid
pub fn create_writer(
    format: OutputFormat,
    config: Option<ExportConfig>,
) -> Result<Box<dyn ApproachWriter>, ExportError> {
    let config = config.unwrap_or_default();
    match format {
        OutputFormat::Csv => Ok(Box::new(CsvApproachWriter::new(&config)?)),
        OutputFormat::Json => Ok(Box::new(JsonApproachWriter::new(&config)?)),
    }
}

/// Write close approaches to a CSV file using the default configuration
///
/// One header row, then one row per approach in input order.
pub fn write_to_csv<'a, I>(results: I, path: impl AsRef<Path>) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    CsvApproachWriter::default().write(&mut results.into_iter(), path.as_ref())
}

/// Write close approaches to a JSON file using the default configuration
///
/// A single array with one object per approach in input order.
pub fn write_to_json<'a, I>(results: I, path: impl AsRef<Path>) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    JsonApproachWriter::default().write(&mut results.into_iter(), path.as_ref())
}
