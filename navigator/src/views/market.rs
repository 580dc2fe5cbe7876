//! Market Insights view

use crate::chart::Chart;
use crate::format;
use crate::Result;
use fx_forecast::metrics::ForecastAccuracy;
use fx_forecast::pipeline::{ForecastPipeline, ForecastResult, Horizon, Summary};
use serde::Serialize;
use std::fmt;

/// Advisory shown beneath the headline rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// Forecast average above today's rate: USD buys more MYR later
    Favorable,
    /// Forecast average at or below today's rate
    Monitor,
}

impl Advisory {
    pub fn from_summary(summary: &Summary) -> Self {
        if summary.avg_future > summary.current_rate {
            Advisory::Favorable
        } else {
            Advisory::Monitor
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Advisory::Favorable => "Highly Favorable Timing",
            Advisory::Monitor => "Monitor the Market",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Advisory::Favorable => {
                "USD is expected to strengthen, increasing purchasing power for medical procedures in Malaysia."
            }
            Advisory::Monitor => {
                "Rates appear stable. Consider flexibility if treatment timing allows."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketInsights {
    pub model: String,
    pub horizon: Horizon,
    pub current_rate: f64,
    pub avg_future: f64,
    pub delta: f64,
    pub advisory: Advisory,
    pub backtest: ForecastAccuracy,
    pub chart: Chart,
}

pub fn market_insights(
    pipeline: &ForecastPipeline<'_>,
    result: &ForecastResult,
) -> Result<MarketInsights> {
    let (train, test) = pipeline.split()?;
    let summary = result.summary();

    let chart = Chart::forecast_chart(
        &train,
        &test,
        result.test_forecast.values(),
        &result.future_dates,
        result.future_forecast.values(),
    );

    Ok(MarketInsights {
        model: pipeline.model_name().to_string(),
        horizon: result.horizon,
        current_rate: summary.current_rate,
        avg_future: summary.avg_future,
        delta: summary.delta(),
        advisory: Advisory::from_summary(&summary),
        backtest: result.test_accuracy.clone(),
        chart,
    })
}

impl fmt::Display for MarketInsights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current USD/MYR:            {}", format::rate(self.current_rate))?;
        writeln!(
            f,
            "{:<27} {} ({:+.4})",
            format!("{}-Day Avg Forecast:", self.horizon),
            format::rate(self.avg_future),
            self.delta
        )?;
        writeln!(f)?;
        writeln!(f, "Action Plan for Patients")?;
        writeln!(f, "  {}", self.advisory.headline())?;
        writeln!(f, "  {}", self.advisory.message())?;
        writeln!(f)?;
        write!(f, "{}", self.chart)?;
        writeln!(f)?;
        writeln!(f, "Model: {}", self.model)?;
        write!(f, "{}", self.backtest)
    }
}
