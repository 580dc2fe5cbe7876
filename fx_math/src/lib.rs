//! # FX Math
//!
//! Numeric building blocks for exchange-rate forecasting.
//! This crate provides the exponential smoothing recursions (simple and
//! Holt's double smoothing), the grid search used to fit them offline, and
//! a handful of summary statistics.

use thiserror::Error;

pub mod smoothing;
pub mod stats;

pub use smoothing::{fit_holt, DoubleExponentialSmoothing, ExponentialSmoothing, HoltFit, ParameterGrid};
pub use stats::{mean, sum_squared_error};

/// Errors that can occur in smoothing and statistics calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for smoothing math operations
pub type Result<T> = std::result::Result<T, MathError>;
