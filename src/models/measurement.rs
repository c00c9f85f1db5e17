use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One observation as read from the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub period_start: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl MeasurementRecord {
    pub fn new(period_start: DateTime<Utc>, value: f64) -> Self {
        Self {
            period_start,
            value,
            numerator: None,
            denominator: None,
            division: None,
            region: None,
        }
    }

    pub fn with_counts(mut self, numerator: f64, denominator: f64) -> Self {
        self.numerator = Some(numerator);
        self.denominator = Some(denominator);
        self
    }

    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Both ratio fields populated with finite, non-negative numbers.
    pub fn counts(&self) -> Option<RatioCounts> {
        match (self.numerator, self.denominator) {
            (Some(n), Some(d)) if is_count(n) && is_count(d) => Some(RatioCounts {
                numerator: n,
                denominator: d,
            }),
            _ => None,
        }
    }

    pub fn has_counts(&self) -> bool {
        self.counts().is_some()
    }

    /// Reports records the persistence layer should not have produced.
    ///
    /// Aggregation tolerates these (they just miss the weighted path), so
    /// callers use this for load-time diagnostics only.
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() {
            return Err(EngineError::InvalidRecord {
                period_start: self.period_start,
                reason: format!("value {} is not finite", self.value),
            });
        }
        match (self.numerator, self.denominator) {
            (Some(_), None) => Err(EngineError::InvalidRecord {
                period_start: self.period_start,
                reason: "numerator present without denominator".to_string(),
            }),
            (None, Some(_)) => Err(EngineError::InvalidRecord {
                period_start: self.period_start,
                reason: "denominator present without numerator".to_string(),
            }),
            (Some(n), Some(d)) if !is_count(n) || !is_count(d) => {
                Err(EngineError::InvalidRecord {
                    period_start: self.period_start,
                    reason: format!("ratio counts {n}/{d} must be finite and non-negative"),
                })
            }
            _ => Ok(()),
        }
    }
}

fn is_count(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

/// Summed numerator/denominator behind a ratio value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioCounts {
    pub numerator: f64,
    pub denominator: f64,
}

impl RatioCounts {
    /// A proportion cannot have more successes than trials.
    pub fn is_proportion(&self) -> bool {
        self.numerator <= self.denominator
    }

    pub fn ratio(&self) -> Option<f64> {
        if self.denominator > 0.0 {
            Some(self.numerator / self.denominator)
        } else {
            None
        }
    }
}

/// One aggregated period. Periods without records are never materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPoint {
    pub period_start: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<RatioCounts>,
}

impl PeriodPoint {
    pub fn new(period_start: DateTime<Utc>, value: f64) -> Self {
        Self {
            period_start,
            value,
            counts: None,
        }
    }

    pub fn with_counts(mut self, counts: RatioCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    /// Sample size for per-point limits, when the point carries usable counts.
    pub fn sample_size(&self) -> Option<f64> {
        self.counts
            .map(|c| c.denominator)
            .filter(|n| n.is_finite() && *n > 0.0)
    }
}
