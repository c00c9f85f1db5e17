//! Engine-level configuration. Metric-level settings live on `MetricDefinition`.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::math::MAX_PRECISION;
use crate::error::{EngineError, Result};

pub const DEFAULT_PRECISION: u32 = 6;
pub const DEFAULT_MIN_CHART_POINTS: usize = 2;

/// Spread estimator for the individuals chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndividualsEstimator {
    /// Mean center line, limits from the average moving range (2.66 at 3σ).
    #[default]
    AverageMovingRange,
    /// Median center line, limits from the median moving range (3.145 at 3σ).
    MedianMovingRange,
}

impl FromStr for IndividualsEstimator {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" | "mean" | "average_moving_range" => {
                Ok(IndividualsEstimator::AverageMovingRange)
            }
            "median" | "median_moving_range" => Ok(IndividualsEstimator::MedianMovingRange),
            _ => Err(EngineError::Config {
                key: "SPC_INDIVIDUALS_ESTIMATOR",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Decimal places every numeric output is rounded to.
    pub precision: u32,
    /// Fewer points than this and no chart is produced.
    pub min_chart_points: usize,
    pub individuals_estimator: IndividualsEstimator,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            min_chart_points: DEFAULT_MIN_CHART_POINTS,
            individuals_estimator: IndividualsEstimator::default(),
        }
    }
}

impl EngineConfig {
    /// Reads `SPC_PRECISION`, `SPC_MIN_CHART_POINTS` and
    /// `SPC_INDIVIDUALS_ESTIMATOR`, keeping defaults for unset keys.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("SPC_PRECISION") {
            config.precision = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|p| *p <= MAX_PRECISION)
                .ok_or(EngineError::Config {
                    key: "SPC_PRECISION",
                    value: raw,
                })?;
        }

        if let Ok(raw) = env::var("SPC_MIN_CHART_POINTS") {
            config.min_chart_points = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= DEFAULT_MIN_CHART_POINTS)
                .ok_or(EngineError::Config {
                    key: "SPC_MIN_CHART_POINTS",
                    value: raw,
                })?;
        }

        if let Ok(raw) = env::var("SPC_INDIVIDUALS_ESTIMATOR") {
            config.individuals_estimator = raw.parse()?;
        }

        Ok(config)
    }

    /// Decimal places for every output, capped at [`MAX_PRECISION`].
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn with_estimator(mut self, estimator: IndividualsEstimator) -> Self {
        self.individuals_estimator = estimator;
        self
    }
}

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
