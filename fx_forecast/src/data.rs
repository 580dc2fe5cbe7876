//! Exchange-rate series handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the date column in the source file
pub const DATE_COLUMN: &str = "date";
/// Name of the USD/MYR rate column in the source file
pub const VALUE_COLUMN: &str = "USD";

/// Daily exchange-rate series, strictly increasing by date
///
/// Built once at startup and never mutated; everything downstream borrows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

/// Borrowed, contiguous run of a [`TimeSeries`]
///
/// May be empty (e.g. the training segment of a series that is exactly as
/// long as the backtest window).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSlice<'a> {
    dates: &'a [NaiveDate],
    values: &'a [f64],
}

/// Data loader for exchange-rate files
#[derive(Debug)]
pub struct SeriesLoader;

impl SeriesLoader {
    /// Load a series from a CSV file with `date` and `USD` columns
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<TimeSeries> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let series = Self::from_reader(file)?;

        info!(
            path = %path.display(),
            observations = series.len(),
            first = %series.first_date(),
            last = %series.last_date(),
            "loaded exchange-rate series"
        );
        Ok(series)
    }

    /// Read a series from any CSV source
    ///
    /// Rows may appear in any order; they are sorted ascending by date.
    /// Extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<TimeSeries> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let date_idx = Self::column_index(&headers, DATE_COLUMN)?;
        let value_idx = Self::column_index(&headers, VALUE_COLUMN)?;

        let mut points = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            // header is line 1
            let row = i + 2;

            let raw_date = record.get(date_idx).unwrap_or_default();
            let date = parse_day_first(raw_date).ok_or_else(|| ForecastError::DateParse {
                row,
                value: raw_date.to_string(),
            })?;

            let raw_value = record.get(value_idx).unwrap_or_default();
            let value: f64 = raw_value.parse().map_err(|_| {
                ForecastError::DataError(format!(
                    "Row {}: '{}' is not a valid {} rate",
                    row, raw_value, VALUE_COLUMN
                ))
            })?;

            points.push((date, value));
        }

        debug!(rows = points.len(), "parsed exchange-rate rows");
        TimeSeries::from_unsorted(points)
    }

    fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ForecastError::MissingColumn(name.to_string()))
    }
}

/// Parse a date string using the day-first convention
///
/// Accepts `DD/MM/YYYY`, `DD-MM-YYYY`, `DD.MM.YYYY` and their two-digit
/// year forms, plus year-first `YYYY-MM-DD`, which is unambiguous. A
/// trailing time component (`31/12/2023 00:00`) is ignored.
pub fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let date_part = raw
        .trim()
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .filter(|part| !part.is_empty())?;
    let sep = ['/', '-', '.'].into_iter().find(|c| date_part.contains(*c))?;

    let parts: Vec<&str> = date_part.split(sep).collect();
    if parts.len() != 3 {
        return None;
    }

    let format = match (parts[0].len(), parts[2].len()) {
        (4, _) => format!("%Y{sep}%m{sep}%d"),
        (1..=2, 4) => format!("%d{sep}%m{sep}%Y"),
        (1..=2, 2) => format!("%d{sep}%m{sep}%y"),
        _ => return None,
    };

    NaiveDate::parse_from_str(date_part, &format).ok()
}

impl TimeSeries {
    /// Create a series from parallel date and value vectors
    ///
    /// Dates must be strictly increasing, values finite, and the series non-empty.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "Dates length ({}) doesn't match values length ({})",
                dates.len(),
                values.len()
            )));
        }
        if dates.is_empty() {
            return Err(ForecastError::DataError(
                "Exchange-rate series is empty".to_string(),
            ));
        }
        if let Some(pair) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(ForecastError::DataError(format!(
                "Dates must be strictly increasing: {} is followed by {}",
                pair[0], pair[1]
            )));
        }
        if let Some((date, value)) = dates.iter().zip(&values).find(|(_, v)| !v.is_finite()) {
            return Err(ForecastError::DataError(format!(
                "Non-finite rate {} on {}",
                value, date
            )));
        }

        Ok(Self { dates, values })
    }

    /// Create a series from (date, value) pairs in any order
    ///
    /// Duplicate dates are rejected rather than silently merged.
    pub fn from_unsorted(mut points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        points.sort_by_key(|(date, _)| *date);
        if let Some(pair) = points.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(ForecastError::DataError(format!(
                "Duplicate observation for {}",
                pair[0].0
            )));
        }

        let (dates, values): (Vec<_>, Vec<_>) = points.into_iter().unzip();
        let series = Self::new(dates, values)?;

        let gaps = series.missing_days();
        if gaps > 0 {
            warn!(missing_days = gaps, "exchange-rate series has calendar gaps");
        }
        Ok(series)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Most recent observed rate
    pub fn last_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Borrow observations `start..end` (end defaults to the series length)
    pub fn slice(&self, start: usize, end: Option<usize>) -> Result<SeriesSlice<'_>> {
        let end = end.unwrap_or(self.len());
        if start > end || end > self.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Slice {}..{} is out of bounds for a series of {} observations",
                start,
                end,
                self.len()
            )));
        }

        Ok(SeriesSlice {
            dates: &self.dates[start..end],
            values: &self.values[start..end],
        })
    }

    /// Number of calendar days absent between the first and last observation
    pub fn missing_days(&self) -> usize {
        self.dates
            .windows(2)
            .map(|w| (w[1] - w[0]).num_days().saturating_sub(1) as usize)
            .sum()
    }
}

impl<'a> SeriesSlice<'a> {
    pub fn dates(&self) -> &'a [NaiveDate] {
        self.dates
    }

    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (date, value) pairs in chronological order
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + 'a {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}
