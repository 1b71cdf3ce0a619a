//! CSV export strategy
//!
//! Opens the destination file and streams rows into it through
//! `csv_format::write_approaches_csv`. Rows are written as the input
//! iterator yields them, so an invalid record or a write failure part way
//! through leaves the rows before it in the file.

use crate::io::csv_format::write_approaches_csv;
use crate::io::datetime::{DatetimeFormatter, StrftimeFormatter};
use crate::strategy::{ApproachWriter, ExportConfig, OutputFormat};
use crate::types::{CloseApproach, ExportError};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// CSV export strategy
///
/// # Examples
///
/// ```no_run
/// use neo_export::strategy::{ApproachWriter, CsvApproachWriter};
/// use neo_export::CloseApproach;
/// use std::path::Path;
///
/// let writer = CsvApproachWriter::default();
/// let count = writer
///     .write(&mut std::iter::empty::<&CloseApproach>(), Path::new("approaches.csv"))
///     .expect("Export failed");
/// assert_eq!(count, 0);
/// ```
pub struct CsvApproachWriter {
    formatter: Box<dyn DatetimeFormatter + Send + Sync>,
}

impl CsvApproachWriter {
    /// Create a CSV writer from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CsvApproachWriter)` if the configured datetime pattern is valid
    /// * `Err(ExportError::InvalidDatetimeFormat)` otherwise
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let formatter = StrftimeFormatter::new(&config.datetime_format)?;
        Ok(Self::with_formatter(formatter))
    }

    /// Create a CSV writer with a custom datetime formatter
    pub fn with_formatter(formatter: impl DatetimeFormatter + Send + Sync + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }
}

impl Default for CsvApproachWriter {
    fn default() -> Self {
        Self::with_formatter(StrftimeFormatter::default())
    }
}

impl fmt::Debug for CsvApproachWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvApproachWriter").finish_non_exhaustive()
    }
}

impl ApproachWriter for CsvApproachWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn write(
        &self,
        approaches: &mut dyn Iterator<Item = &CloseApproach>,
        path: &Path,
    ) -> Result<usize, ExportError> {
        log::debug!("Writing CSV export to {}", path.display());

        // csv::Writer buffers internally, so the file is handed over unwrapped
        let mut file = File::create(path).map_err(|e| ExportError::io(path, e))?;

        let count = write_approaches_csv(approaches, &*self.formatter, &mut file)
            .map_err(|e| e.with_path(path))?;

        log::info!("Wrote {} close approaches to {}", count, path.display());

        Ok(count)
    }
}
