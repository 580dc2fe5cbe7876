//! Host-agnostic description of the market forecast chart
//!
//! The chart is data, not pixels: a list of named traces over a shared date
//! axis with a line style each. Interactive hosts draw it from the JSON
//! output; the text output prints a per-trace summary.

use chrono::NaiveDate;
use fx_forecast::SeriesSlice;
use serde::Serialize;
use std::fmt;

pub const CHART_TITLE: &str = "Holt (Double Exponential Smoothing) Exchange Rate Forecast";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    /// Solid with a heavier stroke
    Bold,
}

impl LineStyle {
    pub fn width(self) -> u8 {
        match self {
            LineStyle::Bold => 4,
            _ => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub style: LineStyle,
    pub width: u8,
    pub points: Vec<ChartPoint>,
}

impl Trace {
    pub fn new<I>(name: &str, style: LineStyle, points: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self {
            name: name.to_string(),
            style,
            width: style.width(),
            points: points
                .into_iter()
                .map(|(date, value)| ChartPoint { date, value })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub traces: Vec<Trace>,
}

impl Chart {
    /// Historical, test actual, test forecast (dashed) and future forecast (bold)
    ///
    /// The test forecast is plotted against the test dates, so its length
    /// must match the test segment.
    pub fn forecast_chart(
        train: &SeriesSlice<'_>,
        test: &SeriesSlice<'_>,
        test_forecast: &[f64],
        future_dates: &[NaiveDate],
        future_forecast: &[f64],
    ) -> Self {
        let traces = vec![
            Trace::new("Historical Data", LineStyle::Solid, train.points()),
            Trace::new("Testing Data (Actual)", LineStyle::Solid, test.points()),
            Trace::new(
                "Testing Forecast",
                LineStyle::Dashed,
                test.dates().iter().copied().zip(test_forecast.iter().copied()),
            ),
            Trace::new(
                "Future Forecast",
                LineStyle::Bold,
                future_dates.iter().copied().zip(future_forecast.iter().copied()),
            ),
        ];

        Self {
            title: CHART_TITLE.to_string(),
            x_title: "Date".to_string(),
            y_title: "USD/MYR".to_string(),
            traces,
        }
    }

    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.traces.iter().find(|t| t.name == name)
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  x: {} | y: {}", self.x_title, self.y_title)?;
        for trace in &self.traces {
            match (trace.points.first(), trace.points.last()) {
                (Some(first), Some(last)) => writeln!(
                    f,
                    "  {:<22} {:<6} {:>5} pts  {} .. {}  last {:.4}",
                    trace.name,
                    format!("{:?}", trace.style).to_lowercase(),
                    trace.points.len(),
                    first.date,
                    last.date,
                    last.value
                )?,
                _ => writeln!(f, "  {:<22} (no data)", trace.name)?,
            }
        }
        Ok(())
    }
}
