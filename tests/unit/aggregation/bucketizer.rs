//! Unit tests for period bucketing

use crate::common::{month, record};
use spc_rollup::aggregation::bucketize;

#[test]
fn test_bucketize_empty() {
    assert!(bucketize(&[]).is_empty());
}

#[test]
fn test_bucketize_sorts_periods() {
    let records = vec![record(3, 1.0), record(1, 2.0), record(2, 3.0), record(1, 4.0)];
    let buckets = bucketize(&records);

    let periods: Vec<_> = buckets.keys().copied().collect();
    assert_eq!(periods, vec![month(1), month(2), month(3)]);
    assert_eq!(buckets[&month(1)].len(), 2);
}

#[test]
fn test_bucketize_keeps_input_order_within_period() {
    let records = vec![record(1, 5.0), record(1, 7.0), record(1, 6.0)];
    let buckets = bucketize(&records);
    let values: Vec<f64> = buckets[&month(1)].iter().map(|r| r.value).collect();
    assert_eq!(values, vec![5.0, 7.0, 6.0]);
}

#[test]
fn test_bucketize_exact_instant() {
    let mut later = record(1, 1.0);
    later.period_start += chrono::Duration::seconds(1);
    let records = vec![record(1, 1.0), later];
    assert_eq!(bucketize(&records).len(), 2);
}

#[test]
fn test_bucketize_ignores_dimension_keys() {
    let records = vec![
        record(1, 1.0).with_division("north").with_region("r1"),
        record(1, 2.0).with_division("south").with_region("r2"),
    ];
    let buckets = bucketize(&records);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[&month(1)][1].division.as_deref(), Some("south"));
}
