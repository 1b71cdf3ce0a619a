//! JSON export strategy
//!
//! The document is converted in full before the destination is opened, so
//! an invalid record never creates or truncates the file. Only a failure
//! during the single serialization pass can leave a partial document.

use crate::io::datetime::{DatetimeFormatter, StrftimeFormatter};
use crate::io::json_format::{to_json_document, write_json_document, JsonStyle};
use crate::strategy::{ApproachWriter, ExportConfig, OutputFormat};
use crate::types::{CloseApproach, ExportError};
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON export strategy
pub struct JsonApproachWriter {
    formatter: Box<dyn DatetimeFormatter + Send + Sync>,
    style: JsonStyle,
}

impl JsonApproachWriter {
    /// Create a JSON writer from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(JsonApproachWriter)` if the configured datetime pattern is valid
    /// * `Err(ExportError::InvalidDatetimeFormat)` otherwise
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let formatter = StrftimeFormatter::new(&config.datetime_format)?;
        Ok(Self::with_formatter(formatter, config.json_style))
    }

    /// Create a JSON writer with a custom datetime formatter
    pub fn with_formatter(
        formatter: impl DatetimeFormatter + Send + Sync + 'static,
        style: JsonStyle,
    ) -> Self {
        Self {
            formatter: Box::new(formatter),
            style,
        }
    }

    /// Document layout used by this writer
    pub fn style(&self) -> JsonStyle {
        self.style
    }
}

impl Default for JsonApproachWriter {
    fn default() -> Self {
        Self::with_formatter(StrftimeFormatter::default(), JsonStyle::default())
    }
}

impl fmt::Debug for JsonApproachWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonApproachWriter")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl ApproachWriter for JsonApproachWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn write(
        &self,
        approaches: &mut dyn Iterator<Item = &CloseApproach>,
        path: &Path,
    ) -> Result<usize, ExportError> {
        let document = to_json_document(approaches, &*self.formatter)?;

        log::debug!(
            "Writing JSON export of {} close approaches to {} ({:?})",
            document.len(),
            path.display(),
            self.style
        );

        let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
        let mut output = BufWriter::new(file);

        write_json_document(&document, self.style, &mut output).map_err(|e| e.with_path(path))?;

        log::info!(
            "Wrote {} close approaches to {}",
            document.len(),
            path.display()
        );

        Ok(document.len())
    }
}
