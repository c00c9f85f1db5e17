//! Unit tests for baseline selection

use crate::common::{continuous_series, month};
use spc_rollup::spc::select_baseline;

#[test]
fn test_no_bounds_is_full_series() {
    let series = continuous_series(&[1.0, 2.0, 3.0]);
    assert_eq!(select_baseline(&series, None, None).len(), 3);
}

#[test]
fn test_inclusive_window() {
    let series = continuous_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let baseline = select_baseline(&series, Some(month(2)), Some(month(4)));
    let values: Vec<f64> = baseline.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_open_bounds() {
    let series = continuous_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(select_baseline(&series, Some(month(4)), None).len(), 2);
    assert_eq!(select_baseline(&series, None, Some(month(3))).len(), 3);
}

#[test]
fn test_short_window_falls_back_to_full_series() {
    let series = continuous_series(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(select_baseline(&series, Some(month(4)), Some(month(9))).len(), 4);
    assert_eq!(select_baseline(&series, Some(month(10)), None).len(), 4);
    assert_eq!(select_baseline(&series, Some(month(3)), Some(month(2))).len(), 4);
}
