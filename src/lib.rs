//! Metric roll-up and statistical process control engine.
//!
//! Raw measurement records are bucketed by period, aggregated (ratio
//! metrics are rebuilt from summed counts), and charted with p, u or
//! individuals control limits.

pub mod aggregation;
pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod spc;

pub use config::{EngineConfig, IndividualsEstimator};
pub use engine::RollupEngine;
pub use error::{EngineError, Result};
pub use models::*;
