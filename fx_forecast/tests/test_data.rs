use chrono::NaiveDate;
use fx_forecast::data::SeriesLoader;
use fx_forecast::ForecastError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_loader_sorts_day_first_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,USD,SGD").unwrap();
    writeln!(file, "03/01/2023,4.41,3.30").unwrap();
    writeln!(file, "01/01/2023,4.40,3.31").unwrap();
    writeln!(file, "02/01/2023,4.39,3.29").unwrap();

    let series = SeriesLoader::from_csv(file.path()).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(
        series.dates(),
        &[date(2023, 1, 1), date(2023, 1, 2), date(2023, 1, 3)]
    );
    assert_eq!(series.values(), &[4.40, 4.39, 4.41]);
    assert_eq!(series.last_value(), 4.41);
}

#[test]
fn test_loader_accepts_iso_timestamps() {
    let csv = "date,USD\n2023-01-01T00:00:00,4.40\n2023-01-02T00:00:00,4.42\n";
    let series = SeriesLoader::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(series.dates(), &[date(2023, 1, 1), date(2023, 1, 2)]);
}

#[test]
fn test_loader_missing_file() {
    let result = SeriesLoader::from_csv("nonexistent_file.csv");
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_loader_missing_column() {
    let csv = "date,EUR\n01/01/2023,4.8\n";
    let result = SeriesLoader::from_reader(csv.as_bytes());
    match result {
        Err(ForecastError::MissingColumn(name)) => assert_eq!(name, "USD"),
        other => panic!("expected missing column, got {:?}", other),
    }
}

#[test]
fn test_loader_reports_bad_rows() {
    let bad_date = "date,USD\n01/01/2023,4.4\nnot-a-date,4.5\n";
    match SeriesLoader::from_reader(bad_date.as_bytes()) {
        Err(ForecastError::DateParse { row, value }) => {
            assert_eq!(row, 3);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected date parse error, got {:?}", other),
    }

    let bad_value = "date,USD\n01/01/2023,four\n";
    assert!(matches!(
        SeriesLoader::from_reader(bad_value.as_bytes()),
        Err(ForecastError::DataError(_))
    ));
}

#[test]
fn test_loader_rejects_duplicates_and_empty_files() {
    let duplicate = "date,USD\n01/01/2023,4.4\n01/01/2023,4.5\n";
    assert!(SeriesLoader::from_reader(duplicate.as_bytes()).is_err());

    let empty = "date,USD\n";
    assert!(SeriesLoader::from_reader(empty.as_bytes()).is_err());
}
