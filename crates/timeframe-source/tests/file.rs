// File: crates/timeframe-source/tests/file.rs
// Purpose: JSON and CSV file sources share the endpoint's normalization.

use std::path::PathBuf;
use std::time::Duration;

use timeframe_source::{FetchError, FileSource, Source};

fn write(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_json_file() {
    let path = write(
        "series.json",
        r#"[{"timestamp":"2024-01-01T00:00:00Z","value":1},{"timestamp":"2024-01-02T00:00:00Z","value":"2"}]"#,
    );
    let points = FileSource::new(&path).load().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].value, 2.0);
}

#[test]
fn loads_csv_with_aliased_headers() {
    let path = write("series.csv", "Date,Y\n2024-01-01,3.5\n1704153600000, 4\n");
    let points = FileSource::new(&path).load().unwrap();
    let iso: Vec<String> = points.iter().map(|p| p.iso_timestamp()).collect();
    assert_eq!(iso, ["2024-01-01T00:00:00.000Z", "2024-01-02T00:00:00.000Z"]);
    assert_eq!(points.iter().map(|p| p.value).collect::<Vec<_>>(), [3.5, 4.0]);
}

#[test]
fn csv_without_value_column_is_rejected() {
    let path = write("no_value.csv", "timestamp,price\n2024-01-01,3\n");
    assert!(matches!(FileSource::new(&path).load(), Err(FetchError::Csv(_))));
}

#[test]
fn csv_bad_row_rejects_the_load() {
    let path = write("bad_row.csv", "timestamp,value\n2024-01-01,3\n2024-01-02,n/a\n");
    assert!(matches!(FileSource::new(&path).load(), Err(FetchError::Malformed { index: 1, .. })));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = FileSource::new("target/test_out/does-not-exist.json").load().unwrap_err();
    assert!(matches!(err, FetchError::Io { .. }), "{err:?}");
}

#[test]
fn location_picks_the_source_kind() {
    let t = Duration::from_secs(1);
    assert!(matches!(Source::from_location("https://example.com/api", t), Ok(Source::Http(_))));
    assert!(matches!(Source::from_location("HTTP://example.com/api", t), Ok(Source::Http(_))));
    assert!(matches!(Source::from_location("data/series.csv", t), Ok(Source::File(_))));
}
