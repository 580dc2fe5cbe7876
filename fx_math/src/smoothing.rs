//! Exponential smoothing recursions
//!
//! Contains the two smoothers the forecasting layer is built on:
//! - Simple exponential smoothing (level only)
//! - Double exponential smoothing (Holt's method, level and trend, optionally damped)
//!
//! Both are incremental: feed observations with `update` and read the
//! current state or a forecast at any point. `fit_holt` searches a grid of
//! smoothing constants for the pair with the lowest one-step-ahead error.

use crate::stats::sum_squared_error;
use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(MathError::InvalidInput(format!(
            "{} must be between 0 and 1 (exclusive), got {}",
            name, value
        )));
    }
    Ok(())
}

/// Exponential Smoothing implementation
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    alpha: f64,
    level: Option<f64>,
    values_seen: usize,
}

impl ExponentialSmoothing {
    /// Create a new Exponential Smoothing with the specified alpha (smoothing factor)
    pub fn new(alpha: f64) -> Result<Self> {
        check_unit_interval("Alpha", alpha)?;

        Ok(Self {
            alpha,
            level: None,
            values_seen: 0,
        })
    }

    /// Restore a smoother from a previously fitted level
    pub fn from_state(alpha: f64, level: f64) -> Result<Self> {
        let mut smoother = Self::new(alpha)?;
        if !level.is_finite() {
            return Err(MathError::InvalidInput(format!(
                "Level must be finite, got {}",
                level
            )));
        }
        smoother.level = Some(level);
        Ok(smoother)
    }

    /// Update the Exponential Smoothing with a new value
    pub fn update(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(MathError::InvalidInput(format!(
                "Observation must be finite, got {}",
                value
            )));
        }
        self.values_seen += 1;

        self.level = Some(match self.level {
            None => value,
            Some(current_level) => self.alpha * value + (1.0 - self.alpha) * current_level,
        });

        Ok(())
    }

    /// Get the current smoothed value
    pub fn value(&self) -> Result<f64> {
        self.level.ok_or_else(|| {
            MathError::InsufficientData("No data available for exponential smoothing".to_string())
        })
    }

    /// Forecast the next value (flat: every horizon equals the last level)
    pub fn forecast(&self) -> Result<f64> {
        self.value()
    }

    /// Get the current alpha value
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of observations consumed since construction or the last reset
    pub fn values_seen(&self) -> usize {
        self.values_seen
    }

    /// Reset the Exponential Smoothing, clearing all values
    pub fn reset(&mut self) {
        self.level = None;
        self.values_seen = 0;
    }
}

/// Double Exponential Smoothing (Holt's Method) implementation
///
/// With a damping factor `phi < 1` the trend contribution decays
/// geometrically with the horizon instead of extrapolating linearly.
#[derive(Debug, Clone)]
pub struct DoubleExponentialSmoothing {
    alpha: f64,
    beta: f64,
    phi: f64,
    level: Option<f64>,
    trend: Option<f64>,
    values_seen: usize,
}

impl DoubleExponentialSmoothing {
    /// Create a new Double Exponential Smoothing with the specified parameters
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        check_unit_interval("Alpha", alpha)?;
        check_unit_interval("Beta", beta)?;

        Ok(Self {
            alpha,
            beta,
            phi: 1.0,
            level: None,
            trend: None,
            values_seen: 0,
        })
    }

    /// Apply a trend damping factor in (0, 1]
    pub fn with_damping(mut self, phi: f64) -> Result<Self> {
        if !phi.is_finite() || phi <= 0.0 || phi > 1.0 {
            return Err(MathError::InvalidInput(format!(
                "Damping factor must be in (0, 1], got {}",
                phi
            )));
        }
        self.phi = phi;
        Ok(self)
    }

    /// Restore a smoother from a previously fitted level and trend
    pub fn from_state(alpha: f64, beta: f64, phi: f64, level: f64, trend: f64) -> Result<Self> {
        let mut smoother = Self::new(alpha, beta)?.with_damping(phi)?;
        if !level.is_finite() || !trend.is_finite() {
            return Err(MathError::InvalidInput(format!(
                "Level and trend must be finite, got {} and {}",
                level, trend
            )));
        }
        smoother.level = Some(level);
        smoother.trend = Some(trend);
        Ok(smoother)
    }

    /// Update the Double Exponential Smoothing with a new value
    pub fn update(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(MathError::InvalidInput(format!(
                "Observation must be finite, got {}",
                value
            )));
        }
        self.values_seen += 1;

        match (self.level, self.trend) {
            (None, None) => {
                // First value, just use it as initial level and zero trend
                self.level = Some(value);
                self.trend = Some(0.0);
            }
            (Some(prev_level), Some(prev_trend)) => {
                let damped = self.phi * prev_trend;
                let new_level = self.alpha * value + (1.0 - self.alpha) * (prev_level + damped);
                let new_trend = self.beta * (new_level - prev_level) + (1.0 - self.beta) * damped;

                self.level = Some(new_level);
                self.trend = Some(new_trend);
            }
            _ => {
                return Err(MathError::CalculationError(
                    "Inconsistent state: level and trend should both be Some or None".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the current smoothed value
    pub fn value(&self) -> Result<f64> {
        self.level()
    }

    /// Forecast h steps ahead
    pub fn forecast(&self, h: usize) -> Result<f64> {
        match (self.level, self.trend) {
            (Some(level), Some(trend)) => Ok(level + self.trend_multiplier(h) * trend),
            _ => Err(MathError::InsufficientData(
                "Not enough data to make a forecast".to_string(),
            )),
        }
    }

    /// Forecast every step from 1 through h
    pub fn forecast_path(&self, h: usize) -> Result<Vec<f64>> {
        (1..=h).map(|step| self.forecast(step)).collect()
    }

    // phi + phi^2 + ... + phi^h, which is just h for an undamped trend
    fn trend_multiplier(&self, h: usize) -> f64 {
        if (self.phi - 1.0).abs() < f64::EPSILON {
            return h as f64;
        }
        let mut total = 0.0;
        let mut power = 1.0;
        for _ in 0..h {
            power *= self.phi;
            total += power;
        }
        total
    }

    /// Get the current level
    pub fn level(&self) -> Result<f64> {
        self.level
            .ok_or_else(|| MathError::InsufficientData("Level not calculated yet".to_string()))
    }

    /// Get the current trend
    pub fn trend(&self) -> Result<f64> {
        self.trend
            .ok_or_else(|| MathError::InsufficientData("Trend not calculated yet".to_string()))
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Number of observations consumed since construction or the last reset
    pub fn values_seen(&self) -> usize {
        self.values_seen
    }

    /// Reset the Double Exponential Smoothing, clearing all values
    pub fn reset(&mut self) {
        self.level = None;
        self.trend = None;
        self.values_seen = 0;
    }
}

/// Candidate smoothing constants for `fit_holt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGrid {
    pub alphas: Vec<f64>,
    pub betas: Vec<f64>,
    pub phi: f64,
}

impl ParameterGrid {
    /// A grid containing a single (alpha, beta) pair
    pub fn fixed(alpha: f64, beta: f64) -> Self {
        Self {
            alphas: vec![alpha],
            betas: vec![beta],
            phi: 1.0,
        }
    }

    pub fn with_damping(mut self, phi: f64) -> Self {
        self.phi = phi;
        self
    }

    fn steps(step: f64) -> Vec<f64> {
        let count = (1.0 / step).round() as usize;
        (1..count).map(|i| i as f64 * step).collect()
    }
}

impl Default for ParameterGrid {
    /// 0.05, 0.10, ..., 0.95 for both constants, undamped
    fn default() -> Self {
        Self {
            alphas: Self::steps(0.05),
            betas: Self::steps(0.05),
            phi: 1.0,
        }
    }
}

/// Outcome of fitting Holt's method to a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltFit {
    pub alpha: f64,
    pub beta: f64,
    pub phi: f64,
    /// Level after consuming the whole series
    pub level: f64,
    /// Trend after consuming the whole series
    pub trend: f64,
    /// One-step-ahead sum of squared errors over the series
    pub sse: f64,
}

/// Fit Holt's method by exhaustive search over `grid`
///
/// Every candidate is scored by the sum of squared one-step-ahead errors
/// from the second observation onwards; ties keep the first candidate.
pub fn fit_holt(data: &[f64], grid: &ParameterGrid) -> Result<HoltFit> {
    if data.len() < 2 {
        return Err(MathError::InsufficientData(format!(
            "Holt fitting needs at least 2 observations, got {}",
            data.len()
        )));
    }
    if grid.alphas.is_empty() || grid.betas.is_empty() {
        return Err(MathError::InvalidInput(
            "Parameter grid must contain at least one alpha and one beta".to_string(),
        ));
    }

    let mut best: Option<HoltFit> = None;
    for &alpha in &grid.alphas {
        for &beta in &grid.betas {
            let mut smoother = DoubleExponentialSmoothing::new(alpha, beta)?.with_damping(grid.phi)?;
            smoother.update(data[0])?;

            let mut predictions = Vec::with_capacity(data.len() - 1);
            for &value in &data[1..] {
                predictions.push(smoother.forecast(1)?);
                smoother.update(value)?;
            }
            let sse = sum_squared_error(&data[1..], &predictions)?;

            if best.as_ref().map_or(true, |b| sse < b.sse) {
                best = Some(HoltFit {
                    alpha,
                    beta,
                    phi: grid.phi,
                    level: smoother.level()?,
                    trend: smoother.trend()?,
                    sse,
                });
            }
        }
    }

    best.ok_or_else(|| MathError::CalculationError("No candidate parameters evaluated".to_string()))
}
