//! Static catalogs: procedure prices, hospitals by city, recovery guidance
//!
//! The built-in catalog is embedded from `catalog.json`; a file with the
//! same layout can replace it without code changes.

use crate::{NavigatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN: &str = include_str!("catalog.json");

/// Recovery risk level for a treatment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High caution required",
            RiskLevel::Moderate => "Moderate caution required",
            RiskLevel::Low => "Low risk activities",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            RiskLevel::High => "🔴",
            RiskLevel::Moderate => "🟡",
            RiskLevel::Low => "🟢",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub name: String,
    pub cost_myr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityHospitals {
    pub city: String,
    pub hospitals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentAdvice {
    pub category: String,
    pub activities: Vec<String>,
    pub nutrition: Vec<String>,
    pub risk: RiskLevel,
}

/// All static lookup tables used by the views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    procedures: Vec<Procedure>,
    cities: Vec<CityHospitals>,
    treatments: Vec<TreatmentAdvice>,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    /// Load a replacement catalog from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), "loaded catalog override");
        Ok(catalog)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(text).map_err(|e| NavigatorError::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.procedures.is_empty() {
            return Err(NavigatorError::Catalog("no procedures listed".to_string()));
        }
        if let Some(p) = self
            .procedures
            .iter()
            .find(|p| !p.cost_myr.is_finite() || p.cost_myr <= 0.0)
        {
            return Err(NavigatorError::Catalog(format!(
                "procedure '{}' has invalid cost {}",
                p.name, p.cost_myr
            )));
        }
        if self.cities.is_empty() {
            return Err(NavigatorError::Catalog("no cities listed".to_string()));
        }
        if let Some(c) = self.cities.iter().find(|c| c.hospitals.is_empty()) {
            return Err(NavigatorError::Catalog(format!(
                "city '{}' has no hospitals",
                c.city
            )));
        }
        if self.treatments.is_empty() {
            return Err(NavigatorError::Catalog("no treatment categories listed".to_string()));
        }

        unique("city", self.cities.iter().map(|c| c.city.as_str()))?;
        unique("treatment", self.treatments.iter().map(|t| t.category.as_str()))?;
        Ok(())
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    /// City names in catalog order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|c| c.city.as_str())
    }

    /// Treatment categories in catalog order
    pub fn treatments(&self) -> impl Iterator<Item = &str> {
        self.treatments.iter().map(|t| t.category.as_str())
    }

    /// Accredited hospitals for `city`; unknown cities are an error, never an empty list
    pub fn hospitals(&self, city: &str) -> Result<&[String]> {
        self.cities
            .iter()
            .find(|c| c.city == city)
            .map(|c| c.hospitals.as_slice())
            .ok_or_else(|| NavigatorError::UnknownCity {
                city: city.to_string(),
                known: self.cities().map(str::to_string).collect(),
            })
    }

    /// Recovery guidance for a treatment category
    pub fn recovery(&self, treatment: &str) -> Result<&TreatmentAdvice> {
        self.treatments
            .iter()
            .find(|t| t.category == treatment)
            .ok_or_else(|| NavigatorError::UnknownTreatment {
                treatment: treatment.to_string(),
                known: self.treatments().map(str::to_string).collect(),
            })
    }
}

fn unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(NavigatorError::Catalog(format!(
                "duplicate {} '{}'",
                kind, name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.procedures().len(), 4);
        assert_eq!(
            catalog.cities().collect::<Vec<_>>(),
            vec!["Kuala Lumpur", "Penang", "Johor Bahru", "Melaka"]
        );
        assert_eq!(catalog.treatments().count(), 4);
        assert_eq!(catalog.hospitals("Melaka").unwrap(), &["Mahkota Medical Centre"]);
    }

    #[test]
    fn unknown_keys_are_errors() {
        let catalog = Catalog::builtin().unwrap();
        match catalog.hospitals("Ipoh") {
            Err(NavigatorError::UnknownCity { city, known }) => {
                assert_eq!(city, "Ipoh");
                assert_eq!(known.len(), 4);
            }
            other => panic!("expected unknown city, got {:?}", other),
        }
        assert!(matches!(
            catalog.recovery("Dermatology"),
            Err(NavigatorError::UnknownTreatment { .. })
        ));
    }

    #[test]
    fn validation_rejects_empty_hospital_list() {
        let text = r#"{
            "procedures": [{"name": "Scan", "cost_myr": 100}],
            "cities": [{"city": "Ipoh", "hospitals": []}],
            "treatments": [{"category": "General", "activities": [], "nutrition": [], "risk": "low"}]
        }"#;
        assert!(matches!(
            Catalog::from_json(text),
            Err(NavigatorError::Catalog(_))
        ));
    }

    #[test]
    fn validation_rejects_empty_city_list() {
        let text = r#"{
            "procedures": [{"name": "Scan", "cost_myr": 100}],
            "cities": [],
            "treatments": [{"category": "General", "activities": [], "nutrition": [], "risk": "low"}]
        }"#;
        match Catalog::from_json(text) {
            Err(NavigatorError::Catalog(msg)) => assert_eq!(msg, "no cities listed"),
            other => panic!("expected catalog error, got {:?}", other),
        }
    }

    #[test]
    fn validation_rejects_duplicate_cities() {
        let text = r#"{
            "procedures": [{"name": "Scan", "cost_myr": 100}],
            "cities": [
                {"city": "Ipoh", "hospitals": ["A"]},
                {"city": "Ipoh", "hospitals": ["B"]}
            ],
            "treatments": [{"category": "General", "activities": [], "nutrition": [], "risk": "low"}]
        }"#;
        assert!(Catalog::from_json(text).is_err());
    }
}
