//! End-to-end integration tests
//!
//! These tests drive the public API the way a caller would: build a batch
//! of close approaches, export it to files in a temporary directory, then
//! read the files back. They cover:
//! - Row/element counts matching the input for both formats
//! - Input order being preserved
//! - Absent name and unknown diameter handling
//! - Byte-identical re-serialization of read-back documents
//! - Error propagation for unwritable destinations

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use neo_export::io::{
        read_csv_rows, read_json_document, write_csv_rows, write_json_document, JsonStyle,
    };
    use neo_export::strategy::{create_writer, ApproachWriter, ExportConfig, OutputFormat};
    use neo_export::{write_to_csv, write_to_json, CloseApproach, ExportError, NearEarthObject};
    use rstest::rstest;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn start_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Build `count` approaches cycling through a few NEOs with and without
    /// names, diameters and hazard flags. Times descend so that any sorting
    /// by time would be visible in the output.
    fn approaches(count: usize) -> Vec<CloseApproach> {
        let neos = [
            Arc::new(NearEarthObject::new("433", Some("Eros"), Some(16.84), false)),
            Arc::new(NearEarthObject::new("2020 AB", None, None, true)),
            Arc::new(NearEarthObject::new("99942", Some("Apophis"), Some(0.37), true)),
            Arc::new(NearEarthObject::new("1036", Some("Ganymed"), Some(f64::NAN), false)),
        ];

        (0..count)
            .map(|i| {
                CloseApproach::new(
                    start_time() - Duration::hours(i as i64 * 7),
                    0.01 + i as f64 * 0.125,
                    3.5 + i as f64 * 1.25,
                    Arc::clone(&neos[i % neos.len()]),
                )
            })
            .collect()
    }

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    #[case::several(9)]
    #[case::many(250)]
    fn test_counts_match_input(#[case] count: usize) {
        init_logger();
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let json_path = dir.path().join("out.json");
        let input = approaches(count);

        assert_eq!(write_to_csv(&input, &csv_path).unwrap(), count);
        assert_eq!(write_to_json(&input, &json_path).unwrap(), count);

        let rows = read_csv_rows(fs::File::open(&csv_path).unwrap()).unwrap();
        let elements = read_json_document(fs::File::open(&json_path).unwrap()).unwrap();

        assert_eq!(rows.len(), count);
        assert_eq!(elements.len(), count);
    }

    #[test]
    fn test_order_is_preserved() {
        init_logger();
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let json_path = dir.path().join("out.json");
        let input = approaches(12);

        write_to_csv(&input, &csv_path).unwrap();
        write_to_json(&input, &json_path).unwrap();

        let rows = read_csv_rows(fs::File::open(&csv_path).unwrap()).unwrap();
        let elements = read_json_document(fs::File::open(&json_path).unwrap()).unwrap();

        for ((approach, row), element) in input.iter().zip(&rows).zip(&elements) {
            let expected_time = approach.time.format("%Y-%m-%d %H:%M").to_string();
            assert_eq!(row.datetime_utc, expected_time);
            assert_eq!(row.distance_au, approach.distance);
            assert_eq!(row.designation, approach.neo.designation);
            assert_eq!(element.datetime_utc, expected_time);
            assert_eq!(element.velocity_km_s, approach.velocity);
            assert_eq!(element.neo.designation, approach.neo.designation);
        }
    }

    #[test]
    fn test_duplicate_records_are_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let one = approaches(1).remove(0);
        let input = vec![one.clone(), one.clone(), one];

        assert_eq!(write_to_csv(&input, &path).unwrap(), 3);
        assert_eq!(read_csv_rows(fs::File::open(&path).unwrap()).unwrap().len(), 3);
    }

    #[test]
    fn test_absent_name_and_unknown_diameter() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let json_path = dir.path().join("out.json");
        let neo = Arc::new(NearEarthObject::new("433", None, Some(f64::NAN), false));
        let input = vec![CloseApproach::new(start_time(), 0.5, 10.2, neo)];

        write_to_csv(&input, &csv_path).unwrap();
        write_to_json(&input, &json_path).unwrap();

        assert_eq!(
            fs::read_to_string(&csv_path).unwrap(),
            "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous\n\
             2020-01-01 00:00,0.5,10.2,433,,nan,False\n"
        );
        assert_eq!(
            fs::read_to_string(&json_path).unwrap(),
            r#"[{"datetime_utc": "2020-01-01 00:00", "distance_au": 0.5, "velocity_km_s": 10.2, "neo": {"designation": "433", "name": "", "diameter_km": null, "potentially_hazardous": false}}]"#
        );
    }

    #[test]
    fn test_empty_input() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let json_path = dir.path().join("out.json");
        let input: Vec<CloseApproach> = Vec::new();

        write_to_csv(&input, &csv_path).unwrap();
        write_to_json(&input, &json_path).unwrap();

        assert_eq!(
            fs::read_to_string(&csv_path).unwrap(),
            "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous\n"
        );
        assert_eq!(fs::read_to_string(&json_path).unwrap(), "[]");
    }

    #[test]
    fn test_csv_round_trip_is_byte_identical() {
        init_logger();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_to_csv(&approaches(40), &path).unwrap();
        let original = fs::read(&path).unwrap();

        let rows = read_csv_rows(original.as_slice()).unwrap();
        let mut rewritten = Vec::new();
        write_csv_rows(rows.into_iter().map(Ok), &mut rewritten).unwrap();

        assert_eq!(rewritten, original);
    }

    #[rstest]
    #[case::spaced(JsonStyle::Spaced)]
    #[case::compact(JsonStyle::Compact)]
    #[case::pretty(JsonStyle::Pretty)]
    fn test_json_round_trip_is_byte_identical(#[case] style: JsonStyle) {
        init_logger();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let config = ExportConfig::new("%Y-%m-%d %H:%M", style);
        let writer = create_writer(OutputFormat::Json, Some(config)).unwrap();
        writer.write(&mut approaches(40).iter(), &path).unwrap();
        let original = fs::read(&path).unwrap();

        let document = read_json_document(original.as_slice()).unwrap();
        let mut rewritten = Vec::new();
        write_json_document(&document, style, &mut rewritten).unwrap();

        assert_eq!(rewritten, original);
    }

    #[rstest]
    fn test_unwritable_destination(
        #[values(OutputFormat::Csv, OutputFormat::Json)] format: OutputFormat,
    ) {
        let dir = tempdir().unwrap();
        // A directory cannot be opened as a file for writing
        let path = dir.path().to_path_buf();
        let writer = create_writer(format, None).unwrap();

        let result = writer.write(&mut approaches(2).iter(), &path);

        assert!(
            matches!(result, Err(ExportError::IoError { .. })),
            "{} export to a directory should fail with IoError, got {:?}",
            format,
            result
        );
    }

    #[rstest]
    fn test_repeated_exports_overwrite(
        #[values(OutputFormat::Csv, OutputFormat::Json)] format: OutputFormat,
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out");
        let writer = create_writer(format, None).unwrap();

        writer.write(&mut approaches(30).iter(), &path).unwrap();
        writer.write(&mut approaches(1).iter(), &path).unwrap();

        let count = match format {
            OutputFormat::Csv => read_csv_rows(fs::File::open(&path).unwrap()).unwrap().len(),
            OutputFormat::Json => read_json_document(fs::File::open(&path).unwrap())
                .unwrap()
                .len(),
        };
        assert_eq!(count, 1);
    }
}
