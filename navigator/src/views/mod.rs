//! The three planning views and the `render` entry point

use crate::catalog::Catalog;
use crate::{NavigatorError, Result, FOOTER};
use fx_forecast::pipeline::{ForecastPipeline, Horizon};
use fx_forecast::{Forecaster, TimeSeries};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub mod budget;
pub mod market;
pub mod recovery;

pub use budget::{BudgetPlan, CostScenario, ProcedureCost, SavingsVerdict};
pub use market::{Advisory, MarketInsights};
pub use recovery::RecoveryPlan;

/// Which view to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Market,
    Budget,
    Recovery,
}

impl View {
    pub const ALL: [View; 3] = [View::Market, View::Budget, View::Recovery];

    /// Selector label
    pub fn label(self) -> &'static str {
        match self {
            View::Market => "Market Insights",
            View::Budget => "Budget & Hospital Planner",
            View::Recovery => "Recovery & Travel",
        }
    }

    /// Heading shown above the rendered view
    pub fn title(self) -> &'static str {
        match self {
            View::Market => "Exchange Rate & Action Plan",
            View::Budget => "Budget & Hospital Planner",
            View::Recovery => "Recovery & Wellness Planning",
        }
    }
}

impl FromStr for View {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" | "market-insights" => Ok(View::Market),
            "budget" | "budget-planner" => Ok(View::Budget),
            "recovery" | "recovery-travel" => Ok(View::Recovery),
            _ => Err(NavigatorError::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved values of the user controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInputs {
    pub horizon: usize,
    pub cost_myr: f64,
    pub city: String,
    pub treatment: String,
}

impl UserInputs {
    /// Smallest treatment cost the budget view accepts
    pub const MIN_COST_MYR: f64 = 100.0;
    pub const DEFAULT_COST_MYR: f64 = 20_000.0;

    pub fn horizon(&self) -> Result<Horizon> {
        Ok(Horizon::new(self.horizon)?)
    }

    /// Treatment cost checked against the budget view's minimum
    pub fn cost_myr(&self) -> Result<f64> {
        if !self.cost_myr.is_finite() || self.cost_myr < Self::MIN_COST_MYR {
            return Err(NavigatorError::InvalidInput(format!(
                "Treatment cost must be at least {} MYR, got {}",
                Self::MIN_COST_MYR,
                self.cost_myr
            )));
        }
        Ok(self.cost_myr)
    }

    /// Check every numeric control, whichever view reads it
    pub fn validate(&self) -> Result<()> {
        self.horizon()?;
        self.cost_myr()?;
        Ok(())
    }
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            horizon: Horizon::DEFAULT,
            cost_myr: Self::DEFAULT_COST_MYR,
            city: "Kuala Lumpur".to_string(),
            treatment: "Cardiac/Major Surgery".to_string(),
        }
    }
}

/// A fully rendered view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderOutput {
    Market(MarketInsights),
    Budget(BudgetPlan),
    Recovery(RecoveryPlan),
}

impl RenderOutput {
    pub fn view(&self) -> View {
        match self {
            RenderOutput::Market(_) => View::Market,
            RenderOutput::Budget(_) => View::Budget,
            RenderOutput::Recovery(_) => View::Recovery,
        }
    }
}

impl fmt::Display for RenderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.view().title();
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", "=".repeat(title.chars().count()))?;
        match self {
            RenderOutput::Market(view) => write!(f, "{}", view)?,
            RenderOutput::Budget(view) => write!(f, "{}", view)?,
            RenderOutput::Recovery(view) => write!(f, "{}", view)?,
        }
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(f, "{}", FOOTER)
    }
}

/// Render one view from the shared series and model
///
/// Pure: the same arguments always produce the same output, and nothing is
/// cached between calls. Each view checks only the controls it reads, and
/// the forecast pipeline only runs for views that show rates.
pub fn render(
    view: View,
    series: &TimeSeries,
    model: &dyn Forecaster,
    catalog: &Catalog,
    inputs: &UserInputs,
) -> Result<RenderOutput> {
    debug!(view = ?view, horizon = inputs.horizon, "rendering view");

    let output = match view {
        View::Market => {
            let horizon = inputs.horizon()?;
            let pipeline = ForecastPipeline::new(series, model);
            let result = pipeline.run(horizon)?;
            RenderOutput::Market(market::market_insights(&pipeline, &result)?)
        }
        View::Budget => {
            let horizon = inputs.horizon()?;
            inputs.cost_myr()?;
            let result = ForecastPipeline::new(series, model).run(horizon)?;
            RenderOutput::Budget(budget::budget_plan(&result.summary(), result.horizon, inputs, catalog)?)
        }
        View::Recovery => RenderOutput::Recovery(recovery::recovery_plan(&inputs.treatment, catalog)?),
    };
    Ok(output)
}
