//! Unit tests for the individuals chart

use crate::common::{assert_close, continuous_series};
use spc_rollup::config::IndividualsEstimator;
use spc_rollup::models::{ChartFamily, SigmaLevel};
use spc_rollup::spc::calculate_individuals_chart;

const VALUES: [f64; 6] = [10.0, 12.0, 11.0, 13.0, 50.0, 12.0];

#[test]
fn test_average_moving_range_limits() {
    let points = continuous_series(&VALUES);
    let chart = calculate_individuals_chart(
        &points,
        &points,
        SigmaLevel::Three,
        IndividualsEstimator::AverageMovingRange,
        6,
    )
    .unwrap();

    assert_eq!(chart.family, ChartFamily::Individuals);
    assert_close(chart.center_line, 18.0);
    assert_close(chart.moving_range.unwrap(), 16.0);
    assert_close(chart.upper_limit.unwrap(), 60.56);
    assert_close(chart.lower_limit.unwrap(), -24.56);
}

#[test]
fn test_limits_are_shared() {
    let points = continuous_series(&VALUES);
    let chart = calculate_individuals_chart(
        &points,
        &points,
        SigmaLevel::Three,
        IndividualsEstimator::AverageMovingRange,
        6,
    )
    .unwrap();
    assert!(chart
        .points
        .iter()
        .all(|p| p.upper_limit == chart.upper_limit && p.lower_limit == chart.lower_limit));
}

#[test]
fn test_median_moving_range_flags_excursion() {
    let points = continuous_series(&VALUES);
    let chart = calculate_individuals_chart(
        &points,
        &points,
        SigmaLevel::Three,
        IndividualsEstimator::MedianMovingRange,
        6,
    )
    .unwrap();

    assert_close(chart.center_line, 12.0);
    assert_close(chart.moving_range.unwrap(), 2.0);
    assert_close(chart.upper_limit.unwrap(), 18.29);
    assert_close(chart.lower_limit.unwrap(), 5.71);

    let flagged: Vec<bool> = chart.points.iter().map(|p| p.beyond_limits).collect();
    assert_eq!(flagged, vec![false, false, false, false, true, false]);
}

#[test]
fn test_sigma_scaling() {
    let points = continuous_series(&VALUES);
    let width = |sigma| {
        let chart = calculate_individuals_chart(
            &points,
            &points,
            sigma,
            IndividualsEstimator::AverageMovingRange,
            6,
        )
        .unwrap();
        chart.upper_limit.unwrap() - chart.lower_limit.unwrap()
    };
    assert!(width(SigmaLevel::One) < width(SigmaLevel::Two));
    assert!(width(SigmaLevel::Two) < width(SigmaLevel::Three));
}

#[test]
fn test_single_point_baseline() {
    let points = continuous_series(&[5.0]);
    assert!(calculate_individuals_chart(
        &points,
        &points,
        SigmaLevel::Three,
        IndividualsEstimator::AverageMovingRange,
        6,
    )
    .is_none());
}
