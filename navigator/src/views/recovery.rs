//! Recovery & Travel view

use crate::catalog::{Catalog, RiskLevel};
use crate::Result;
use serde::Serialize;
use std::fmt;

pub const DISCHARGE_REMINDER: &str =
    "Always follow hospital discharge instructions and consult your doctor.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoveryPlan {
    pub treatment: String,
    pub activities: Vec<String>,
    pub nutrition: Vec<String>,
    pub risk_level: RiskLevel,
    pub risk_label: String,
    pub reminder: String,
}

/// Look up guidance for one treatment category; depends on nothing else
pub fn recovery_plan(treatment: &str, catalog: &Catalog) -> Result<RecoveryPlan> {
    let advice = catalog.recovery(treatment)?;

    Ok(RecoveryPlan {
        treatment: advice.category.clone(),
        activities: advice.activities.clone(),
        nutrition: advice.nutrition.clone(),
        risk_level: advice.risk,
        risk_label: advice.risk.label().to_string(),
        reminder: DISCHARGE_REMINDER.to_string(),
    })
}

impl fmt::Display for RecoveryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Post-Treatment Lifestyle Support: {}", self.treatment)?;
        writeln!(f)?;
        writeln!(f, "Recommended Activities")?;
        for item in &self.activities {
            writeln!(f, "  - {}", item)?;
        }
        writeln!(f, "Nutrition Guidance")?;
        for item in &self.nutrition {
            writeln!(f, "  - {}", item)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Recovery Risk Level: {} {}",
            self.risk_level.indicator(),
            self.risk_label
        )?;
        writeln!(f, "{}", self.reminder)
    }
}
