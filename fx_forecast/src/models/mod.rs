//! Forecasting models for exchange-rate series

use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::fmt::Debug;

/// Forecast result containing predicted values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Forecasted values, one per step
    values: Vec<f64>,
    /// Number of periods forecasted
    horizon: usize,
}

impl Forecast {
    /// Create a new forecast
    pub fn new(values: Vec<f64>, horizon: usize) -> Result<Self> {
        if values.len() != horizon {
            return Err(ForecastError::DataError(format!(
                "Values length ({}) doesn't match horizon ({})",
                values.len(),
                horizon
            )));
        }

        Ok(Self { values, horizon })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Arithmetic mean of the forecasted values
    pub fn mean(&self) -> Result<f64> {
        Ok(fx_math::mean(&self.values)?)
    }
}

/// A fitted model that can project the series forward
///
/// Implementations are pure: forecasting never updates the model, so the
/// same instance serves every render for the life of the process.
pub trait Forecaster: Debug + Send + Sync {
    /// Forecast `steps` periods past the end of the data the model was fit on
    fn forecast(&self, steps: usize) -> Result<Forecast>;

    /// Name of the model
    fn name(&self) -> &str;
}

pub(crate) fn check_steps(steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(ForecastError::InvalidParameter(
            "Forecast steps must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

pub mod artifact;
pub mod exponential_smoothing;
pub mod holt;

pub use artifact::{load_model, save_model, ModelArtifact, ModelSpec};
pub use exponential_smoothing::SimpleSmoothingModel;
pub use holt::HoltModel;
