//! Error types for parsing, validation and the report binary.
//!
//! Computation itself degrades instead of failing; see `engine`.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid record for period {period_start}: {reason}")]
    InvalidRecord {
        period_start: DateTime<Utc>,
        reason: String,
    },

    #[error("unknown aggregation type: {0}")]
    UnknownAggregationType(String),

    #[error("unknown data type: {0}")]
    UnknownDataType(String),

    #[error("sigma level must be 1, 2 or 3, got {0}")]
    InvalidSigmaLevel(u8),

    #[error("invalid configuration value for {key}: {value}")]
    Config { key: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
