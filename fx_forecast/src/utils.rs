//! Utility functions for the fx_forecast crate

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// `horizon` consecutive calendar days starting the day after `last`
pub fn future_dates(last: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon as u64)
        .map(|offset| {
            last.checked_add_days(Days::new(offset)).ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "Date overflow projecting {} days past {}",
                    offset, last
                ))
            })
        })
        .collect()
}

/// Generate a reproducible daily random-walk rate series
///
/// Used for demos and tests; the walk starts at `start_rate` with Gaussian
/// daily moves of `daily_vol` and never drops below 0.01.
pub fn synthetic_series(
    start: NaiveDate,
    len: usize,
    start_rate: f64,
    daily_vol: f64,
    seed: u64,
) -> Result<TimeSeries> {
    let noise = Normal::new(0.0, daily_vol)
        .map_err(|e| ForecastError::InvalidParameter(format!("Invalid volatility: {}", e)))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let dates = future_dates(start, len)?
        .into_iter()
        .map(|d| d - Days::new(1))
        .collect();

    let mut rate = start_rate;
    let values = (0..len)
        .map(|_| {
            let current = rate;
            rate = (rate + noise.sample(&mut rng)).max(0.01);
            current
        })
        .collect();

    TimeSeries::new(dates, values)
}
