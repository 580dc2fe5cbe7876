//! # FX Forecast
//!
//! Loading, forecasting and backtesting for a daily USD/MYR exchange-rate series.
//!
//! ## Features
//!
//! - Day-first CSV loading into an immutable, strictly ordered [`TimeSeries`]
//! - Pre-fit smoothing models (Holt and simple) restored from a JSON artifact
//! - A forecast pipeline that holds out the last 216 observations for a
//!   backtest and projects a 1 to 30 day horizon
//! - Accuracy metrics for the backtest segment
//!
//! ## Quick Start
//!
//! ```no_run
//! use fx_forecast::data::SeriesLoader;
//! use fx_forecast::models::artifact::load_model;
//! use fx_forecast::pipeline::{ForecastPipeline, Horizon};
//!
//! let series = SeriesLoader::from_csv("exchange-rates-new.csv")?;
//! let model = load_model("holt_model.json")?;
//!
//! let pipeline = ForecastPipeline::new(&series, model.as_ref());
//! let result = pipeline.run(Horizon::new(7)?)?;
//! println!("{:.4} -> {:.4}", result.current_rate, result.avg_future);
//! # Ok::<(), fx_forecast::ForecastError>(())
//! ```

pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{SeriesLoader, SeriesSlice, TimeSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{Forecast, Forecaster};
pub use crate::pipeline::{ForecastPipeline, ForecastResult, Horizon, TEST_WINDOW};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
