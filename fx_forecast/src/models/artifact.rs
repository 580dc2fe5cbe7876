//! Persisted model artifacts
//!
//! A fitted model is stored as a small JSON document:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "model": { "kind": "holt", "alpha": 0.85, "beta": 0.1, "level": 4.41, "trend": -0.002 },
//!   "fitted_on": { "observations": 1800, "last_date": "2024-06-30", "sse": 0.21 }
//! }
//! ```
//!
//! `phi` is optional for Holt models and defaults to 1 (undamped trend).

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{Forecaster, HoltModel, SimpleSmoothingModel};
use chrono::NaiveDate;
use fx_math::HoltFit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Artifact layout understood by this build
pub const FORMAT_VERSION: u32 = 1;

fn undamped() -> f64 {
    1.0
}

/// Parameters of a fitted model, tagged by model family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Holt {
        alpha: f64,
        beta: f64,
        #[serde(default = "undamped")]
        phi: f64,
        level: f64,
        trend: f64,
    },
    Simple {
        alpha: f64,
        level: f64,
    },
}

/// Where the parameters came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitProvenance {
    pub observations: usize,
    pub last_date: NaiveDate,
    pub sse: f64,
}

/// On-disk representation of a fitted model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model: ModelSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitted_on: Option<FitProvenance>,
}

impl ModelArtifact {
    pub fn new(model: ModelSpec) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            model,
            fitted_on: None,
        }
    }

    /// Artifact for a Holt fit over `series`
    pub fn from_holt_fit(fit: &HoltFit, series: &TimeSeries) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            model: ModelSpec::Holt {
                alpha: fit.alpha,
                beta: fit.beta,
                phi: fit.phi,
                level: fit.level,
                trend: fit.trend,
            },
            fitted_on: Some(FitProvenance {
                observations: series.len(),
                last_date: series.last_date(),
                sse: fit.sse,
            }),
        }
    }

    /// Parse an artifact from its JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(text)
            .map_err(|e| ForecastError::ModelFormat(format!("Malformed model artifact: {}", e)))?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(ForecastError::ModelFormat(format!(
                "Unsupported artifact version {} (expected {})",
                artifact.format_version, FORMAT_VERSION
            )));
        }
        Ok(artifact)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ForecastError::ModelFormat(format!("Cannot serialize artifact: {}", e)))
    }

    /// Rebuild the forecaster described by this artifact
    pub fn into_forecaster(self) -> Result<Box<dyn Forecaster>> {
        let model: Box<dyn Forecaster> = match self.model {
            ModelSpec::Holt {
                alpha,
                beta,
                phi,
                level,
                trend,
            } => Box::new(HoltModel::from_params(alpha, beta, phi, level, trend).map_err(invalid)?),
            ModelSpec::Simple { alpha, level } => {
                Box::new(SimpleSmoothingModel::from_params(alpha, level).map_err(invalid)?)
            }
        };
        Ok(model)
    }
}

fn invalid(err: ForecastError) -> ForecastError {
    ForecastError::ModelFormat(format!("Invalid model parameters: {}", err))
}

/// Load a fitted model from a JSON artifact
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Box<dyn Forecaster>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let artifact = ModelArtifact::from_json(&text)?;
    if let Some(provenance) = &artifact.fitted_on {
        debug!(
            observations = provenance.observations,
            last_date = %provenance.last_date,
            "model provenance"
        );
    }

    let model = artifact.into_forecaster()?;
    info!(path = %path.display(), model = model.name(), "loaded forecasting model");
    Ok(model)
}

/// Write a model artifact as pretty-printed JSON
pub fn save_model<P: AsRef<Path>>(path: P, artifact: &ModelArtifact) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, artifact.to_json()?)?;
    info!(path = %path.display(), "saved model artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_defaults_to_undamped() {
        let artifact = ModelArtifact::from_json(
            r#"{"format_version":1,"model":{"kind":"holt","alpha":0.5,"beta":0.1,"level":4.7,"trend":0.01}}"#,
        )
        .unwrap();

        match artifact.model {
            ModelSpec::Holt { phi, .. } => assert_eq!(phi, 1.0),
            other => panic!("unexpected model {:?}", other),
        }
        assert!(artifact.fitted_on.is_none());
    }

    #[test]
    fn rejects_unknown_kind_and_version() {
        let unknown = r#"{"format_version":1,"model":{"kind":"arima","p":1}}"#;
        assert!(matches!(
            ModelArtifact::from_json(unknown),
            Err(ForecastError::ModelFormat(_))
        ));

        let future = r#"{"format_version":2,"model":{"kind":"simple","alpha":0.5,"level":4.7}}"#;
        assert!(matches!(
            ModelArtifact::from_json(future),
            Err(ForecastError::ModelFormat(_))
        ));
    }

    #[test]
    fn invalid_parameters_surface_as_format_errors() {
        let artifact = ModelArtifact::new(ModelSpec::Simple {
            alpha: 2.0,
            level: 4.7,
        });
        assert!(matches!(
            artifact.into_forecaster(),
            Err(ForecastError::ModelFormat(_))
        ));
    }
}
