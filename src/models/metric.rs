//! Metric configuration handed to the engine by the surrounding application.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::chart::ChartFamily;

/// Numeric regime of a metric's values.
///
/// Deserialization is lenient: unknown labels become `Unrecognized` so the
/// metric still aggregates. `FromStr` is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DataType {
    Continuous,
    Proportion,
    Rate,
    /// Anything the configuration store holds that this engine cannot chart.
    Unrecognized,
}

impl FromStr for DataType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(DataType::Continuous),
            "proportion" => Ok(DataType::Proportion),
            "rate" => Ok(DataType::Rate),
            _ => Err(EngineError::UnknownDataType(s.to_string())),
        }
    }
}

impl From<String> for DataType {
    fn from(label: String) -> Self {
        label.parse().unwrap_or(DataType::Unrecognized)
    }
}

impl DataType {
    /// Ratio types are rebuilt from summed counts instead of averaged.
    pub fn is_ratio(self) -> bool {
        matches!(self, DataType::Proportion | DataType::Rate)
    }

    pub fn chart_family(self) -> Option<ChartFamily> {
        match self {
            DataType::Continuous => Some(ChartFamily::Individuals),
            DataType::Proportion => Some(ChartFamily::Proportion),
            DataType::Rate => Some(ChartFamily::Rate),
            DataType::Unrecognized => None,
        }
    }
}

/// Simple roll-up method, also the fallback when ratio counts are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AggregationType {
    Sum,
    #[default]
    Average,
    Min,
    Max,
    Latest,
}

impl FromStr for AggregationType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(AggregationType::Sum),
            "average" | "avg" | "mean" => Ok(AggregationType::Average),
            "min" => Ok(AggregationType::Min),
            "max" => Ok(AggregationType::Max),
            "latest" | "last" => Ok(AggregationType::Latest),
            _ => Err(EngineError::UnknownAggregationType(s.to_string())),
        }
    }
}

impl TryFrom<String> for AggregationType {
    type Error = EngineError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Control-limit width in standard deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SigmaLevel {
    One,
    Two,
    #[default]
    Three,
}

impl SigmaLevel {
    pub fn z(self) -> f64 {
        match self {
            SigmaLevel::One => 1.0,
            SigmaLevel::Two => 2.0,
            SigmaLevel::Three => 3.0,
        }
    }
}

impl TryFrom<u8> for SigmaLevel {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SigmaLevel::One),
            2 => Ok(SigmaLevel::Two),
            3 => Ok(SigmaLevel::Three),
            other => Err(EngineError::InvalidSigmaLevel(other)),
        }
    }
}

impl From<SigmaLevel> for u8 {
    fn from(level: SigmaLevel) -> Self {
        match level {
            SigmaLevel::One => 1,
            SigmaLevel::Two => 2,
            SigmaLevel::Three => 3,
        }
    }
}

/// Read-only metric configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    #[serde(default)]
    pub name: String,
    pub data_type: DataType,
    #[serde(default)]
    pub aggregation_type: AggregationType,
    #[serde(default)]
    pub sigma_level: SigmaLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_end: Option<DateTime<Utc>>,
    /// Display scaling for rates (e.g. per 1,000). Applied by the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_multiplier: Option<f64>,
}

impl MetricDefinition {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            aggregation_type: AggregationType::default(),
            sigma_level: SigmaLevel::default(),
            baseline_start: None,
            baseline_end: None,
            rate_multiplier: None,
        }
    }

    pub fn with_aggregation(mut self, aggregation_type: AggregationType) -> Self {
        self.aggregation_type = aggregation_type;
        self
    }

    pub fn with_sigma_level(mut self, sigma_level: SigmaLevel) -> Self {
        self.sigma_level = sigma_level;
        self
    }

    pub fn with_baseline(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.baseline_start = start;
        self.baseline_end = end;
        self
    }

    pub fn with_rate_multiplier(mut self, multiplier: f64) -> Self {
        self.rate_multiplier = Some(multiplier);
        self
    }
}
