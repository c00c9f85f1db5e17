//! Period bucketizer

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::measurement::MeasurementRecord;

/// Records grouped by exact period start, in chronological order.
pub type PeriodBuckets<'a> = BTreeMap<DateTime<Utc>, Vec<&'a MeasurementRecord>>;

/// Group records by `period_start`.
///
/// Equality is on the exact instant. Within a bucket records keep the
/// caller's order, which is what `Latest` aggregation relies on.
pub fn bucketize(records: &[MeasurementRecord]) -> PeriodBuckets<'_> {
    let mut buckets: PeriodBuckets<'_> = BTreeMap::new();
    for record in records {
        buckets.entry(record.period_start).or_default().push(record);
    }
    buckets
}
