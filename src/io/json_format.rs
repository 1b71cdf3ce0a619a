//! JSON format handling for close approach exports
//!
//! The JSON export is a single array at the document root. Each element
//! carries the approach fields plus a nested `neo` object. Field order in
//! the structs below is the field order in the output.

use crate::io::datetime::DatetimeFormatter;
use crate::types::{CloseApproach, ExportError};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

/// Layout of the emitted JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, `", "` and `": "` separators
    #[default]
    Spaced,
    /// Single line, no whitespace
    Compact,
    /// Indented, one field per line
    Pretty,
}

/// One element of the JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonApproach {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: JsonNeo,
}

/// The nested `neo` object of a JSON export element
///
/// An unknown diameter is written as `null`: JSON has no NaN literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonNeo {
    pub designation: String,
    pub name: String,
    pub diameter_km: Option<f64>,
    pub potentially_hazardous: bool,
}

impl JsonApproach {
    /// Convert a close approach into its JSON shape
    pub fn from_approach(approach: &CloseApproach, formatter: &dyn DatetimeFormatter) -> Self {
        JsonApproach {
            datetime_utc: formatter.format(&approach.time),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo: JsonNeo {
                designation: approach.neo.designation.clone(),
                name: approach.neo.name.clone().unwrap_or_default(),
                diameter_km: approach.neo.diameter.filter(|d| !d.is_nan()),
                potentially_hazardous: approach.neo.hazardous,
            },
        }
    }
}

/// Formatter producing `[{"a": 1, "b": 2}, {...}]` on a single line
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Convert close approaches into a JSON document
///
/// Every approach is validated on the way; the first invalid one aborts the
/// conversion.
pub fn to_json_document<'a, I>(
    approaches: I,
    formatter: &dyn DatetimeFormatter,
) -> Result<Vec<JsonApproach>, ExportError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    approaches
        .into_iter()
        .enumerate()
        .map(|(index, approach)| -> Result<JsonApproach, ExportError> {
            approach
                .validate()
                .map_err(|reason| ExportError::invalid_record(index, reason))?;
            Ok(JsonApproach::from_approach(approach, formatter))
        })
        .collect()
}

/// Write close approaches to JSON format
///
/// The whole document is converted before anything is written, so an
/// invalid record leaves `output` untouched. The array is then serialized
/// in one pass.
///
/// # Arguments
///
/// * `approaches` - Close approaches to export
/// * `formatter` - Renders the `datetime_utc` field
/// * `style` - Document layout
/// * `output` - Mutable reference to a writer for outputting JSON
///
/// # Returns
///
/// * `Ok(usize)` - Number of array elements written
/// * `Err(ExportError)` - Invalid record or write failure
pub fn write_approaches_json<'a, I>(
    approaches: I,
    formatter: &dyn DatetimeFormatter,
    style: JsonStyle,
    output: &mut dyn Write,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let document = to_json_document(approaches, formatter)?;

    write_json_document(&document, style, output)?;

    Ok(document.len())
}

/// Serialize a prepared document in the requested layout
pub fn write_json_document(
    document: &[JsonApproach],
    style: JsonStyle,
    output: &mut dyn Write,
) -> Result<(), ExportError> {
    match style {
        JsonStyle::Spaced => {
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut *output, SpacedFormatter);
            document.serialize(&mut serializer)?;
        }
        JsonStyle::Compact => serde_json::to_writer(&mut *output, document)?,
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut *output, document)?,
    }

    output.flush()?;

    Ok(())
}

/// Read a JSON export back into its elements
pub fn read_json_document(input: impl Read) -> Result<Vec<JsonApproach>, ExportError> {
    Ok(serde_json::from_reader(input)?)
}
