//! spc-report
//!
//! Reads a JSON request (`{"metric": ..., "records": [...], "preAggregated": [...]}`)
//! from the file named by the first argument, or stdin, and prints the
//! aggregated series and control chart as JSON.

use std::io::Read;

use dotenvy::dotenv;
use serde::Deserialize;
use spc_rollup::{logging, EngineConfig, MeasurementRecord, MetricDefinition, PeriodPoint, RollupEngine};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRequest {
    metric: MetricDefinition,
    #[serde(default)]
    records: Vec<MeasurementRecord>,
    #[serde(default)]
    pre_aggregated: Vec<PeriodPoint>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env()?;
    info!(
        precision = config.precision,
        estimator = ?config.individuals_estimator,
        "Starting spc-report"
    );

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request: ReportRequest = serde_json::from_str(&raw)?;

    for record in &request.records {
        if let Err(e) = record.validate() {
            warn!(error = %e, "Record will not qualify for ratio aggregation");
        }
    }

    let engine = RollupEngine::new(config);
    let output = engine.compute_with_fallback(&request.metric, &request.records, &request.pre_aggregated);

    if let Some(chart) = &output.chart {
        let signals = chart.signals().count();
        info!(
            metric = %request.metric.name,
            family = ?chart.family,
            signals = signals,
            "Control chart computed"
        );
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
