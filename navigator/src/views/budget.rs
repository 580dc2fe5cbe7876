//! Budget & Hospital Planner view

use crate::catalog::Catalog;
use crate::format;
use crate::views::UserInputs;
use crate::{NavigatorError, Result};
use fx_forecast::pipeline::{Horizon, Summary};
use serde::Serialize;
use std::fmt;

pub const HOSPITAL_CAPTION: &str =
    "Hospital listings are informational and do not imply endorsement.";

/// Convert a MYR amount to USD at `rate` MYR per USD
///
/// Zero, negative or non-finite rates are rejected instead of dividing.
pub fn convert(cost_myr: f64, rate: f64, label: &'static str) -> Result<f64> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(NavigatorError::DegenerateRate { label, rate });
    }
    Ok(cost_myr / rate)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostScenario {
    pub label: String,
    pub rate: f64,
    pub cost_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcedureCost {
    pub name: String,
    pub cost_myr: f64,
    pub usd_current: f64,
    pub usd_forecast: f64,
    /// `usd_current - usd_forecast`
    pub difference: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SavingsVerdict {
    /// Paying later is cheaper by `amount` USD
    Savings { amount: f64 },
    NoAdvantage,
}

impl SavingsVerdict {
    pub fn from_savings(savings: f64) -> Self {
        if savings > 0.0 {
            SavingsVerdict::Savings { amount: savings }
        } else {
            SavingsVerdict::NoAdvantage
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPlan {
    pub cost_myr: f64,
    /// "Pay Today" then "Pay in N Days"
    pub scenarios: Vec<CostScenario>,
    /// Cost today minus cost at the forecast rate
    pub savings: f64,
    pub verdict: SavingsVerdict,
    pub procedures: Vec<ProcedureCost>,
    pub city: String,
    pub hospitals: Vec<String>,
}

pub fn budget_plan(
    summary: &Summary,
    horizon: Horizon,
    inputs: &UserInputs,
    catalog: &Catalog,
) -> Result<BudgetPlan> {
    let today = convert(inputs.cost_myr, summary.current_rate, "current")?;
    let later = convert(inputs.cost_myr, summary.avg_future, "forecast average")?;
    let savings = today - later;

    let scenarios = vec![
        CostScenario {
            label: "Pay Today".to_string(),
            rate: summary.current_rate,
            cost_usd: today,
        },
        CostScenario {
            label: format!("Pay in {} Days", horizon),
            rate: summary.avg_future,
            cost_usd: later,
        },
    ];

    let procedures = catalog
        .procedures()
        .iter()
        .map(|p| -> Result<ProcedureCost> {
            let usd_current = convert(p.cost_myr, summary.current_rate, "current")?;
            let usd_forecast = convert(p.cost_myr, summary.avg_future, "forecast average")?;
            Ok(ProcedureCost {
                name: p.name.clone(),
                cost_myr: p.cost_myr,
                usd_current,
                usd_forecast,
                difference: usd_current - usd_forecast,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let hospitals = catalog.hospitals(&inputs.city)?.to_vec();

    Ok(BudgetPlan {
        cost_myr: inputs.cost_myr,
        scenarios,
        savings,
        verdict: SavingsVerdict::from_savings(savings),
        procedures,
        city: inputs.city.clone(),
        hospitals,
    })
}

impl fmt::Display for BudgetPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Medical Cost Conversion ({})", format::myr(self.cost_myr))?;
        writeln!(f, "  {:<18} {:>13} {:>22}", "Scenario", "Exchange Rate", "Estimated Cost (USD)")?;
        for s in &self.scenarios {
            writeln!(
                f,
                "  {:<18} {:>13} {:>22}",
                s.label,
                format::rate(s.rate),
                format::usd(s.cost_usd)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Standard Procedure Cost Analysis")?;
        writeln!(
            f,
            "  {:<20} {:>12} {:>14} {:>17} {:>12}",
            "Procedure", "Cost_MYR", "USD (Current)", "USD (Forecasted)", "Difference"
        )?;
        for p in &self.procedures {
            writeln!(
                f,
                "  {:<20} {:>12} {:>14} {:>17} {:>12}",
                p.name,
                format::myr(p.cost_myr),
                format::usd(p.usd_current),
                format::usd(p.usd_forecast),
                format::usd(p.difference)
            )?;
        }
        writeln!(f)?;

        match self.verdict {
            SavingsVerdict::Savings { amount } => {
                writeln!(f, "Potential savings: {} USD", format::usd(amount))?
            }
            SavingsVerdict::NoAdvantage => writeln!(f, "No significant exchange advantage detected.")?,
        }
        writeln!(f)?;

        writeln!(f, "Top JCI-Accredited hospitals in {}:", self.city)?;
        for hospital in &self.hospitals {
            writeln!(f, "  - {}", hospital)?;
        }
        writeln!(f, "{}", HOSPITAL_CAPTION)
    }
}
