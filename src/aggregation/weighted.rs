//! Ratio-weighted aggregation
//!
//! Proportion and rate periods are rebuilt from summed numerators and
//! denominators. Averaging per-record ratios would over-weight low-volume
//! records.

use tracing::trace;

use crate::aggregation::bucketizer::bucketize;
use crate::aggregation::simple::{aggregate_simple, aggregate_with_precision};
use crate::common::math;
use crate::config::DEFAULT_PRECISION;
use crate::models::measurement::{MeasurementRecord, PeriodPoint, RatioCounts};
use crate::models::metric::{AggregationType, DataType};

/// Aggregate records per period according to the metric's data type.
///
/// Proportion: `Σnum / Σden * 100`. Rate: `Σnum / Σden`.
/// A bucket with no record carrying both counts, or a summed denominator
/// of zero, falls back to `fallback` over the plain values.
pub fn aggregate_weighted(
    records: &[MeasurementRecord],
    data_type: DataType,
    fallback: AggregationType,
) -> Vec<PeriodPoint> {
    aggregate_weighted_with_precision(records, data_type, fallback, DEFAULT_PRECISION)
}

pub fn aggregate_weighted_with_precision(
    records: &[MeasurementRecord],
    data_type: DataType,
    fallback: AggregationType,
    precision: u32,
) -> Vec<PeriodPoint> {
    if !data_type.is_ratio() {
        return aggregate_simple(records, fallback, precision);
    }

    let scale = if data_type == DataType::Proportion { 100.0 } else { 1.0 };

    bucketize(records)
        .into_iter()
        .filter_map(|(period_start, bucket)| {
            if let Some(counts) = sum_counts(bucket.iter().copied(), data_type) {
                if let Some(ratio) = counts.ratio() {
                    return Some(
                        PeriodPoint::new(period_start, math::round_to(ratio * scale, precision))
                            .with_counts(counts),
                    );
                }
            }

            trace!(
                period = %period_start,
                records = bucket.len(),
                "No usable ratio counts, falling back to simple aggregation"
            );
            let values: Vec<f64> = bucket.iter().map(|r| r.value).collect();
            aggregate_with_precision(&values, fallback, precision)
                .map(|value| PeriodPoint::new(period_start, value))
        })
        .collect()
}

/// Sum counts over records that carry usable numerator and denominator.
///
/// Negative counts never qualify; for proportions neither does a numerator
/// above its denominator. `None` when no record qualifies.
pub fn sum_counts<'a>(
    records: impl IntoIterator<Item = &'a MeasurementRecord>,
    data_type: DataType,
) -> Option<RatioCounts> {
    records
        .into_iter()
        .filter_map(MeasurementRecord::counts)
        .filter(|c| data_type != DataType::Proportion || c.is_proportion())
        .fold(None, |acc: Option<RatioCounts>, c| {
            let mut total = acc.unwrap_or(RatioCounts {
                numerator: 0.0,
                denominator: 0.0,
            });
            total.numerator += c.numerator;
            total.denominator += c.denominator;
            Some(total)
        })
}
