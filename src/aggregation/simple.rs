//! Simple aggregation (sum, average, min, max, latest)

use crate::aggregation::bucketizer::bucketize;
use crate::common::math;
use crate::config::DEFAULT_PRECISION;
use crate::models::measurement::{MeasurementRecord, PeriodPoint};
use crate::models::metric::AggregationType;

/// Collapse values into one number.
///
/// Returns `None` for an empty slice; absence is never reported as zero.
/// `Latest` takes the last element in the order supplied.
pub fn aggregate(values: &[f64], method: AggregationType) -> Option<f64> {
    aggregate_with_precision(values, method, DEFAULT_PRECISION)
}

pub fn aggregate_with_precision(
    values: &[f64],
    method: AggregationType,
    precision: u32,
) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let raw = match method {
        AggregationType::Sum => math::sum(values),
        AggregationType::Average => math::mean(values)?,
        AggregationType::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregationType::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        AggregationType::Latest => *values.last()?,
    };

    Some(math::round_to(raw, precision))
}

/// Bucket records by period and aggregate each bucket's `value` fields.
pub fn aggregate_simple(
    records: &[MeasurementRecord],
    method: AggregationType,
    precision: u32,
) -> Vec<PeriodPoint> {
    bucketize(records)
        .into_iter()
        .filter_map(|(period_start, bucket)| {
            let values: Vec<f64> = bucket.iter().map(|r| r.value).collect();
            aggregate_with_precision(&values, method, precision)
                .map(|value| PeriodPoint::new(period_start, value))
        })
        .collect()
}
