//! Simple exponential smoothing model

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{check_steps, Forecast, Forecaster};
use fx_math::{sum_squared_error, ExponentialSmoothing, ParameterGrid};

/// Fitted simple exponential smoothing model (flat forecast at the last level)
#[derive(Debug, Clone)]
pub struct SimpleSmoothingModel {
    name: String,
    smoother: ExponentialSmoothing,
}

impl SimpleSmoothingModel {
    /// Restore a model from persisted parameters
    pub fn from_params(alpha: f64, level: f64) -> Result<Self> {
        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            smoother: ExponentialSmoothing::from_state(alpha, level)?,
        })
    }

    /// Fit with a fixed alpha over the full series
    pub fn fit(series: &TimeSeries, alpha: f64) -> Result<Self> {
        let mut smoother = ExponentialSmoothing::new(alpha)?;
        for &value in series.values() {
            smoother.update(value)?;
        }

        Self::from_params(alpha, smoother.value()?)
    }

    /// Pick the alpha from the default grid with the lowest one-step-ahead SSE
    pub fn fit_auto(series: &TimeSeries) -> Result<(Self, f64)> {
        let values = series.values();
        let mut best: Option<(f64, f64)> = None;

        for alpha in ParameterGrid::default().alphas {
            let mut smoother = ExponentialSmoothing::new(alpha)?;
            smoother.update(values[0])?;

            let mut predictions = Vec::with_capacity(values.len() - 1);
            for &value in &values[1..] {
                predictions.push(smoother.forecast()?);
                smoother.update(value)?;
            }
            let sse = sum_squared_error(&values[1..], &predictions)?;

            if best.map_or(true, |(_, best_sse)| sse < best_sse) {
                best = Some((alpha, sse));
            }
        }

        let (alpha, sse) = best.ok_or_else(|| {
            ForecastError::InvalidParameter("Empty alpha grid".to_string())
        })?;
        Ok((Self::fit(series, alpha)?, sse))
    }

    pub fn alpha(&self) -> f64 {
        self.smoother.alpha()
    }

    pub fn level(&self) -> Result<f64> {
        Ok(self.smoother.value()?)
    }
}

impl Forecaster for SimpleSmoothingModel {
    fn forecast(&self, steps: usize) -> Result<Forecast> {
        check_steps(steps)?;
        let level = self.smoother.forecast()?;
        Forecast::new(vec![level; steps], steps)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn flat_forecast() {
        let model = SimpleSmoothingModel::from_params(0.3, 4.5).unwrap();
        let forecast = model.forecast(3).unwrap();
        assert_eq!(forecast.values(), &[4.5, 4.5, 4.5]);
    }

    #[test]
    fn fit_uses_whole_series() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let dates = (0..2).map(|i| start + chrono::Days::new(i)).collect();
        let series = TimeSeries::new(dates, vec![10.0, 20.0]).unwrap();

        let model = SimpleSmoothingModel::fit(&series, 0.3).unwrap();
        assert!((model.level().unwrap() - 13.0).abs() < 1e-9);
    }
}
