//! NEO Export Library
//! # Overview
//!
//! This library writes close approaches of near-Earth objects to the two
//! interchange formats used downstream: a flat CSV table and a nested JSON
//! array.
//!
//! # Architecture
//!
//! The library is organized into three components:
//!
//! - [`types`] - Domain records (NearEarthObject, CloseApproach) and errors
//! - [`io`] - Format handling on `Write`/`Read`:
//!   - [`io::datetime`] - Injected formatting of the `datetime_utc` field
//!   - [`io::csv_format`] - One row per approach, NEO fields flattened
//!   - [`io::json_format`] - One object per approach, NEO fields nested
//! - [`strategy`] - File-backed writers selected by [`strategy::OutputFormat`]
//!
//! # Output Fields
//!
//! | CSV column | JSON path |
//! |---|---|
//! | `datetime_utc` | `datetime_utc` |
//! | `distance_au` | `distance_au` |
//! | `velocity_km_s` | `velocity_km_s` |
//! | `designation` | `neo.designation` |
//! | `name` | `neo.name` |
//! | `diameter_km` | `neo.diameter_km` |
//! | `potentially_hazardous` | `neo.potentially_hazardous` |
//!
//! An absent name is written as an empty string in both formats. An unknown
//! diameter is written as `nan` in CSV and `null` in JSON.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use neo_export::{write_to_csv, write_to_json, CloseApproach, NearEarthObject};
//! use std::sync::Arc;
//!
//! let eros = Arc::new(NearEarthObject::new("433", Some("Eros"), Some(16.84), false));
//! let time = NaiveDate::from_ymd_opt(2020, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let approaches = vec![CloseApproach::new(time, 0.5, 10.2, eros)];
//!
//! write_to_csv(&approaches, "approaches.csv").expect("CSV export failed");
//! write_to_json(&approaches, "approaches.json").expect("JSON export failed");
//! ```

// Module declarations
pub mod io;
pub mod strategy;
pub mod types;

pub use strategy::{
    create_writer, write_to_csv, write_to_json, ApproachWriter, ExportConfig, OutputFormat,
};
pub use types::{CloseApproach, ExportError, NearEarthObject};
