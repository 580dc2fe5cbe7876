//! Holt (double exponential smoothing) model

use crate::data::TimeSeries;
use crate::error::Result;
use crate::models::{check_steps, Forecast, Forecaster};
use fx_math::{fit_holt, DoubleExponentialSmoothing, HoltFit, ParameterGrid};
use tracing::debug;

/// Fitted Holt model: smoothing constants plus the final level and trend
#[derive(Debug, Clone)]
pub struct HoltModel {
    name: String,
    smoother: DoubleExponentialSmoothing,
}

impl HoltModel {
    /// Restore a model from persisted parameters
    pub fn from_params(alpha: f64, beta: f64, phi: f64, level: f64, trend: f64) -> Result<Self> {
        let smoother = DoubleExponentialSmoothing::from_state(alpha, beta, phi, level, trend)?;
        let name = if phi < 1.0 {
            format!("Holt damped (alpha={}, beta={}, phi={})", alpha, beta, phi)
        } else {
            format!("Holt (alpha={}, beta={})", alpha, beta)
        };

        Ok(Self { name, smoother })
    }

    /// Fit to the full series, searching `grid` for the smoothing constants
    pub fn fit(series: &TimeSeries, grid: &ParameterGrid) -> Result<(Self, HoltFit)> {
        let fit = fit_holt(series.values(), grid)?;
        debug!(
            alpha = fit.alpha,
            beta = fit.beta,
            sse = fit.sse,
            "fitted Holt model"
        );

        let model = Self::from_params(fit.alpha, fit.beta, fit.phi, fit.level, fit.trend)?;
        Ok((model, fit))
    }

    /// Fit with the default 0.05-step grid
    pub fn fit_auto(series: &TimeSeries) -> Result<(Self, HoltFit)> {
        Self::fit(series, &ParameterGrid::default())
    }

    pub fn alpha(&self) -> f64 {
        self.smoother.alpha()
    }

    pub fn beta(&self) -> f64 {
        self.smoother.beta()
    }

    pub fn phi(&self) -> f64 {
        self.smoother.phi()
    }

    pub fn level(&self) -> Result<f64> {
        Ok(self.smoother.level()?)
    }

    pub fn trend(&self) -> Result<f64> {
        Ok(self.smoother.trend()?)
    }
}

impl Forecaster for HoltModel {
    fn forecast(&self, steps: usize) -> Result<Forecast> {
        check_steps(steps)?;
        let values = self.smoother.forecast_path(steps)?;
        Forecast::new(values, steps)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forecast_extrapolates_trend() {
        let model = HoltModel::from_params(0.8, 0.2, 1.0, 4.70, 0.02).unwrap();
        let forecast = model.forecast(2).unwrap();

        assert_eq!(forecast.horizon(), 2);
        assert_relative_eq!(forecast.values()[0], 4.72, epsilon = 1e-12);
        assert_relative_eq!(forecast.values()[1], 4.74, epsilon = 1e-12);
        assert_relative_eq!(forecast.mean().unwrap(), 4.73, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_rejected() {
        let model = HoltModel::from_params(0.8, 0.2, 1.0, 4.70, 0.02).unwrap();
        assert!(model.forecast(0).is_err());
    }

    #[test]
    fn invalid_params_rejected() {
        assert!(HoltModel::from_params(1.2, 0.2, 1.0, 4.7, 0.0).is_err());
        assert!(HoltModel::from_params(0.5, 0.2, 1.0, f64::INFINITY, 0.0).is_err());
    }
}
