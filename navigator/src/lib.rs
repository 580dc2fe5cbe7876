//! # Navigator
//!
//! `navigator` turns a loaded USD/MYR series and a pre-fit forecasting model
//! into the three planning views of the MedFX Navigator:
//!
//! - **Market Insights**: current rate, forecast average, advisory and a
//!   four-trace forecast chart
//! - **Budget & Hospital Planner**: MYR cost conversion at today's and the
//!   forecast rate, standard procedure costs and accredited hospitals
//! - **Recovery & Travel**: activity, nutrition and risk guidance per
//!   treatment category
//!
//! Rendering is a pure function of its inputs; the host loads the series and
//! model once and passes them in for every render.
//!
//! ## Usage Example
//!
//! ```no_run
//! use fx_forecast::data::SeriesLoader;
//! use fx_forecast::models::artifact::load_model;
//! use navigator::{render, Catalog, UserInputs, View};
//!
//! let series = SeriesLoader::from_csv("exchange-rates-new.csv")?;
//! let model = load_model("holt_model.json")?;
//! let catalog = Catalog::builtin()?;
//!
//! let output = render(View::Budget, &series, model.as_ref(), &catalog, &UserInputs::default())?;
//! println!("{}", output);
//! # Ok::<(), navigator::NavigatorError>(())
//! ```

use fx_forecast::ForecastError;
use thiserror::Error;

pub mod catalog;
pub mod chart;
pub mod config;
pub mod format;
pub mod views;

pub use catalog::{Catalog, RiskLevel};
pub use config::Settings;
pub use views::{render, RenderOutput, UserInputs, View};

/// Shown beneath every view
pub const FOOTER: &str =
    "MedFX Navigator © 2026 | Educational Decision-Support Tool | Not a substitute for medical or financial advice";

/// Errors that can occur while building a view
#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Unknown city '{city}' (available: {})", .known.join(", "))]
    UnknownCity { city: String, known: Vec<String> },

    #[error("Unknown treatment category '{treatment}' (available: {})", .known.join(", "))]
    UnknownTreatment { treatment: String, known: Vec<String> },

    #[error("Unknown view '{0}' (expected market, budget or recovery)")]
    UnknownView(String),

    #[error("Cannot convert costs at a {label} rate of {rate}")]
    DegenerateRate { label: &'static str, rate: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, NavigatorError>;
