//! Forecast pipeline: backtest split, future projection and summary figures
//!
//! The model is evaluated twice per run with different step counts: once
//! over the fixed backtest window and once over the requested horizon. The
//! two forecasts are independent; neither feeds back into the model.

use crate::data::{SeriesSlice, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::metrics::{forecast_accuracy, ForecastAccuracy};
use crate::models::{Forecast, Forecaster};
use crate::utils::future_dates;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Number of trailing observations held out as the backtest segment
pub const TEST_WINDOW: usize = 216;

/// Forecast horizon in days, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Horizon(usize);

impl Horizon {
    pub const MIN: usize = 1;
    pub const MAX: usize = 30;
    pub const DEFAULT: usize = 7;

    pub fn new(days: usize) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&days) {
            return Err(ForecastError::InvalidParameter(format!(
                "Forecast horizon must be between {} and {} days, got {}",
                Self::MIN,
                Self::MAX,
                days
            )));
        }
        Ok(Self(days))
    }

    pub fn days(self) -> usize {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<usize> for Horizon {
    type Error = ForecastError;

    fn try_from(days: usize) -> Result<Self> {
        Self::new(days)
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split into (train, test): test is the last [`TEST_WINDOW`] observations
///
/// A series shorter than the window is rejected; one of exactly the window
/// length yields an empty training segment.
pub fn split(series: &TimeSeries) -> Result<(SeriesSlice<'_>, SeriesSlice<'_>)> {
    if series.len() < TEST_WINDOW {
        return Err(ForecastError::InsufficientData {
            required: TEST_WINDOW,
            actual: series.len(),
        });
    }

    let cut = series.len() - TEST_WINDOW;
    let train = series.slice(0, Some(cut))?;
    let test = series.slice(cut, None)?;
    debug!(train = train.len(), test = test.len(), "split series");
    Ok((train, test))
}

/// Forecast as many steps as the test segment holds
pub fn evaluate_test(model: &dyn Forecaster, test: &SeriesSlice<'_>) -> Result<Forecast> {
    model.forecast(test.len())
}

/// Forecast `horizon` days past the last observation, with their dates
pub fn project_future(
    model: &dyn Forecaster,
    series: &TimeSeries,
    horizon: Horizon,
) -> Result<(Forecast, Vec<NaiveDate>)> {
    let forecast = model.forecast(horizon.days())?;
    let dates = future_dates(series.last_date(), horizon.days())?;
    Ok((forecast, dates))
}

/// Headline figures shared by every view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Last observed rate of the full series
    pub current_rate: f64,
    /// Mean of the future forecast
    pub avg_future: f64,
}

impl Summary {
    /// Forecast average minus current rate
    pub fn delta(&self) -> f64 {
        self.avg_future - self.current_rate
    }
}

pub fn summarize(series: &TimeSeries, future: &Forecast) -> Result<Summary> {
    Ok(Summary {
        current_rate: series.last_value(),
        avg_future: future.mean()?,
    })
}

/// Everything derived from one pipeline run
///
/// Recomputed from scratch for every horizon; holds no reference to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub horizon: Horizon,
    pub test_forecast: Forecast,
    pub test_accuracy: ForecastAccuracy,
    pub future_forecast: Forecast,
    pub future_dates: Vec<NaiveDate>,
    pub current_rate: f64,
    pub avg_future: f64,
}

impl ForecastResult {
    pub fn summary(&self) -> Summary {
        Summary {
            current_rate: self.current_rate,
            avg_future: self.avg_future,
        }
    }
}

/// Pairs the loaded series with the loaded model for repeated runs
#[derive(Debug, Clone, Copy)]
pub struct ForecastPipeline<'a> {
    series: &'a TimeSeries,
    model: &'a dyn Forecaster,
}

impl<'a> ForecastPipeline<'a> {
    pub fn new(series: &'a TimeSeries, model: &'a dyn Forecaster) -> Self {
        Self { series, model }
    }

    pub fn series(&self) -> &'a TimeSeries {
        self.series
    }

    pub fn model_name(&self) -> &'a str {
        self.model.name()
    }

    pub fn split(&self) -> Result<(SeriesSlice<'a>, SeriesSlice<'a>)> {
        split(self.series)
    }

    /// Run backtest, projection and summary for one horizon
    pub fn run(&self, horizon: Horizon) -> Result<ForecastResult> {
        let (_, test) = self.split()?;
        let test_forecast = evaluate_test(self.model, &test)?;
        let test_accuracy = forecast_accuracy(test_forecast.values(), test.values())?;

        let (future_forecast, future_dates) = project_future(self.model, self.series, horizon)?;
        let summary = summarize(self.series, &future_forecast)?;

        debug!(
            model = self.model.name(),
            horizon = horizon.days(),
            current_rate = summary.current_rate,
            avg_future = summary.avg_future,
            "pipeline run complete"
        );

        Ok(ForecastResult {
            horizon,
            test_forecast,
            test_accuracy,
            future_forecast,
            future_dates,
            current_rate: summary.current_rate,
            avg_future: summary.avg_future,
        })
    }
}
