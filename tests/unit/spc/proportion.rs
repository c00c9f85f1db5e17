//! Unit tests for the proportion chart

use crate::common::{assert_close, point, ratio_point};
use spc_rollup::models::{ChartFamily, SigmaLevel};
use spc_rollup::spc::calculate_proportion_chart;

fn series() -> Vec<spc_rollup::models::PeriodPoint> {
    vec![
        ratio_point(1, 10.0, 10.0, 100.0),
        ratio_point(2, 15.0, 30.0, 200.0),
        ratio_point(3, 20.0, 20.0, 100.0),
    ]
}

#[test]
fn test_center_line_from_pooled_counts() {
    let points = series();
    let chart = calculate_proportion_chart(&points, &points, SigmaLevel::Three, 6).unwrap();
    assert_eq!(chart.family, ChartFamily::Proportion);
    assert_close(chart.center_line, 15.0);
    assert!(chart.upper_limit.is_none());
}

#[test]
fn test_limits_vary_with_sample_size() {
    let points = series();
    let chart = calculate_proportion_chart(&points, &points, SigmaLevel::Three, 6).unwrap();

    let small = &chart.points[0];
    let large = &chart.points[1];
    assert_close(small.upper_limit.unwrap(), 25.712143);
    assert_close(small.lower_limit.unwrap(), 4.287857);
    assert_close(large.upper_limit.unwrap(), 22.574629);
    assert_close(large.lower_limit.unwrap(), 7.425371);
    assert!(small.upper_limit.unwrap() > large.upper_limit.unwrap());
}

#[test]
fn test_limits_clipped_to_percentage_range() {
    let points = vec![
        ratio_point(1, 1.0, 1.0, 100.0),
        ratio_point(2, 0.0, 0.0, 2.0),
    ];
    let chart = calculate_proportion_chart(&points, &points, SigmaLevel::Three, 6).unwrap();
    for p in &chart.points {
        assert!(p.lower_limit.unwrap() >= 0.0);
        assert!(p.upper_limit.unwrap() <= 100.0);
    }
    assert_eq!(chart.points[1].lower_limit, Some(0.0));
}

#[test]
fn test_point_without_counts_is_unlimited() {
    let mut points = series();
    points.push(point(4, 40.0));
    let chart = calculate_proportion_chart(&points, &points, SigmaLevel::Three, 6).unwrap();
    let last = chart.points.last().unwrap();
    assert!(last.is_unlimited());
    assert!(!last.beyond_limits);
    assert_close(chart.center_line, 15.0);
}

#[test]
fn test_no_counts_in_baseline() {
    let points = vec![point(1, 10.0), point(2, 20.0)];
    assert!(calculate_proportion_chart(&points, &points, SigmaLevel::Three, 6).is_none());
}

#[test]
fn test_flags_point_above_limit() {
    let mut points = series();
    points.push(ratio_point(4, 60.0, 60.0, 100.0));
    let baseline = series();
    let chart = calculate_proportion_chart(&points, &baseline, SigmaLevel::Three, 6).unwrap();
    assert!(chart.points[3].beyond_limits);
    assert_eq!(chart.signals().count(), 1);
}
