//! Host settings: file locations and default control values
//!
//! Settings come from an optional JSON file; any field left out takes its
//! default, and command-line flags override both.

use crate::views::UserInputs;
use crate::{NavigatorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Exchange-rate CSV with `date` and `USD` columns
    pub data_path: PathBuf,
    /// Fitted model artifact
    pub model_path: PathBuf,
    /// Replacement for the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Default control values
    pub inputs: UserInputs,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("exchange-rates-new.csv"),
            model_path: PathBuf::from("holt_model.json"),
            catalog_path: None,
            inputs: UserInputs::default(),
        }
    }
}

impl Settings {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
            .map_err(|e| NavigatorError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(text).map_err(|e| NavigatorError::Config(e.to_string()))?;
        settings.inputs.validate()?;
        Ok(settings)
    }

    /// Defaults, or the file's contents when a path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{"model_path": "models/holt.json"}"#).unwrap();
        assert_eq!(settings.model_path, PathBuf::from("models/holt.json"));
        assert_eq!(settings.data_path, PathBuf::from("exchange-rates-new.csv"));
        assert_eq!(settings.inputs.horizon, 7);
    }

    #[test]
    fn invalid_defaults_rejected() {
        let text = r#"{"inputs": {"horizon": 45, "cost_myr": 20000, "city": "Penang", "treatment": "General Wellness"}}"#;
        assert!(Settings::from_json(text).is_err());
        assert!(Settings::from_json(r#"{"colour": "blue"}"#).is_err());
    }
}
