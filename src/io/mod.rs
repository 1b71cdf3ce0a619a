//! I/O module
//!
//! Handles the export formats. Everything here works on `Write`/`Read`
//! trait objects; opening files is left to the `strategy` module.
//!
//! # Components
//!
//! - `datetime` - Injected datetime formatting for the `datetime_utc` field
//! - `csv_format` - Flat CSV table (row conversion, serialization, read-back)
//! - `json_format` - Nested JSON array (conversion, layouts, read-back)

pub mod csv_format;
pub mod datetime;
pub mod json_format;

pub use csv_format::{read_csv_rows, write_approaches_csv, write_csv_rows, CsvRow, CSV_HEADER};
pub use datetime::{DatetimeFormatter, StrftimeFormatter, DEFAULT_DATETIME_FORMAT};
pub use json_format::{
    read_json_document, to_json_document, write_approaches_json, write_json_document,
    JsonApproach, JsonNeo, JsonStyle,
};
