//! CSV format handling for close approach exports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRow structure for the flat, one-row-per-approach table
//! - Conversion from domain records to rows
//! - Row serialization and read-back
//!
//! All functions work on `Write`/`Read` (no file handling) for easy testing.

use crate::io::datetime::DatetimeFormatter;
use crate::types::{CloseApproach, ExportError};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io::{Read, Write};

/// Header row of every CSV export, in column order
pub const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Token written in `diameter_km` when the diameter is unknown
pub const UNKNOWN_DIAMETER: &str = "nan";

/// One row of the CSV export
///
/// This is the presentation shape: the approach and its NEO flattened into
/// a single row, with an absent name rendered as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub designation: String,
    pub name: String,
    #[serde(
        serialize_with = "serialize_diameter",
        deserialize_with = "deserialize_diameter"
    )]
    pub diameter_km: Option<f64>,
    #[serde(
        serialize_with = "serialize_hazard",
        deserialize_with = "deserialize_hazard"
    )]
    pub potentially_hazardous: bool,
}

impl CsvRow {
    /// Flatten a close approach into a CSV row
    pub fn from_approach(approach: &CloseApproach, formatter: &dyn DatetimeFormatter) -> Self {
        CsvRow {
            datetime_utc: formatter.format(&approach.time),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            designation: approach.neo.designation.clone(),
            name: approach.neo.name.clone().unwrap_or_default(),
            diameter_km: approach.neo.diameter.filter(|d| !d.is_nan()),
            potentially_hazardous: approach.neo.hazardous,
        }
    }
}

fn serialize_diameter<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(diameter) if !diameter.is_nan() => serializer.serialize_f64(*diameter),
        _ => serializer.serialize_str(UNKNOWN_DIAMETER),
    }
}

fn deserialize_diameter<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(UNKNOWN_DIAMETER) {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid diameter '{}': {}", raw, e)))
}

// Hazard flags use capitalized booleans (`True`/`False`) in CSV exports.
fn serialize_hazard<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "True" } else { "False" })
}

fn deserialize_hazard<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid hazard flag '{}'",
            other
        ))),
    }
}

/// Write close approaches to CSV format
///
/// Writes the header row followed by one row per approach, in input order.
/// Every record is validated just before its row is written, so an invalid
/// record aborts the write with the preceding rows already emitted.
///
/// # Arguments
///
/// * `approaches` - Close approaches to export
/// * `formatter` - Renders the `datetime_utc` column
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(usize)` - Number of data rows written
/// * `Err(ExportError)` - Invalid record or write failure
pub fn write_approaches_csv<'a, I>(
    approaches: I,
    formatter: &dyn DatetimeFormatter,
    output: &mut dyn Write,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let rows = approaches
        .into_iter()
        .enumerate()
        .map(|(index, approach)| -> Result<CsvRow, ExportError> {
            approach
                .validate()
                .map_err(|reason| ExportError::invalid_record(index, reason))?;
            Ok(CsvRow::from_approach(approach, formatter))
        });

    write_csv_rows(rows, output)
}

/// Write prepared rows to CSV format
///
/// The header is always written, so an empty input produces a header-only
/// document. Stops at the first `Err` item and returns it.
pub fn write_csv_rows<I>(rows: I, output: &mut dyn Write) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = Result<CsvRow, ExportError>>,
{
    // Header is written by hand so empty exports still carry it
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(CSV_HEADER)?;

    let mut count = 0;
    for row in rows {
        writer.serialize(row?)?;
        count += 1;
    }

    writer.flush()?;

    Ok(count)
}

/// Read rows back from a CSV export
///
/// The header must match [`CSV_HEADER`] exactly.
pub fn read_csv_rows(input: impl Read) -> Result<Vec<CsvRow>, ExportError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader.headers()?;
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(ExportError::CsvError {
            line: Some(1),
            message: format!(
                "unexpected header: {}",
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    reader
        .deserialize::<CsvRow>()
        .map(|row| row.map_err(ExportError::from))
        .collect()
}
