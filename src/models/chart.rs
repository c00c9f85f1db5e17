use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::measurement::PeriodPoint;
use crate::models::metric::SigmaLevel;

/// Control-chart family, one per charted data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartFamily {
    /// p-chart: per-point limits from the binomial sample size.
    Proportion,
    /// u-chart: per-point limits from the Poisson exposure.
    Rate,
    /// I-MR chart: one shared limit pair from the moving range.
    Individuals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlChartPoint {
    pub period: DateTime<Utc>,
    pub value: f64,
    pub center_line: f64,
    /// `None` when the point has no usable sample size ("unlimited").
    pub upper_limit: Option<f64>,
    pub lower_limit: Option<f64>,
    pub beyond_limits: bool,
}

impl ControlChartPoint {
    pub fn limited(period: DateTime<Utc>, value: f64, center_line: f64, lower: f64, upper: f64) -> Self {
        Self {
            period,
            value,
            center_line,
            upper_limit: Some(upper),
            lower_limit: Some(lower),
            beyond_limits: value > upper || value < lower,
        }
    }

    pub fn unlimited(period: DateTime<Utc>, value: f64, center_line: f64) -> Self {
        Self {
            period,
            value,
            center_line,
            upper_limit: None,
            lower_limit: None,
            beyond_limits: false,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.upper_limit.is_none() && self.lower_limit.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlChartResult {
    pub family: ChartFamily,
    pub sigma_level: SigmaLevel,
    pub center_line: f64,
    /// Shared limits; only the individuals chart has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<f64>,
    /// Moving-range statistic behind individuals limits (mean or median, per estimator).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moving_range: Option<f64>,
    pub baseline_len: usize,
    pub points: Vec<ControlChartPoint>,
}

impl ControlChartResult {
    pub fn signals(&self) -> impl Iterator<Item = &ControlChartPoint> {
        self.points.iter().filter(|p| p.beyond_limits)
    }
}

/// What the facade hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOutput {
    pub series: Vec<PeriodPoint>,
    pub chart: Option<ControlChartResult>,
}
