//! Individuals and moving-range chart (I-MR)

use crate::common::math;
use crate::config::IndividualsEstimator;
use crate::models::chart::{ChartFamily, ControlChartPoint, ControlChartResult};
use crate::models::measurement::PeriodPoint;
use crate::models::metric::SigmaLevel;

/// 3σ scaling of the average moving range (3 / d2, d2 = 1.128).
pub const AVERAGE_MR_FACTOR: f64 = 2.66;
/// 3σ scaling of the median moving range (3 / d4, d4 = 0.954).
pub const MEDIAN_MR_FACTOR: f64 = 3.145;

/// Calculate an individuals chart.
///
/// Center = mean of baseline values, MR̄ = mean of |xᵢ − xᵢ₋₁|.
/// Limits = center ± (z/3)·2.66·MR̄, shared by every displayed point.
/// The median estimator swaps both means for medians and uses 3.145.
pub fn calculate_individuals_chart(
    points: &[PeriodPoint],
    baseline: &[PeriodPoint],
    sigma_level: SigmaLevel,
    estimator: IndividualsEstimator,
    precision: u32,
) -> Option<ControlChartResult> {
    let values: Vec<f64> = baseline.iter().map(|p| p.value).collect();
    let ranges = math::moving_ranges(&values);

    let (center, moving_range, factor) = match estimator {
        IndividualsEstimator::AverageMovingRange => (
            math::mean(&values)?,
            math::mean(&ranges)?,
            AVERAGE_MR_FACTOR,
        ),
        IndividualsEstimator::MedianMovingRange => (
            math::median(&values)?,
            math::median(&ranges)?,
            MEDIAN_MR_FACTOR,
        ),
    };

    let width = (sigma_level.z() / 3.0) * factor * moving_range;
    let center_line = math::round_to(center, precision);
    let upper = math::round_to(center + width, precision);
    let lower = math::round_to(center - width, precision);

    let chart_points = points
        .iter()
        .map(|point| {
            ControlChartPoint::limited(point.period_start, point.value, center_line, lower, upper)
        })
        .collect();

    Some(ControlChartResult {
        family: ChartFamily::Individuals,
        sigma_level,
        center_line,
        upper_limit: Some(upper),
        lower_limit: Some(lower),
        moving_range: Some(math::round_to(moving_range, precision)),
        baseline_len: baseline.len(),
        points: chart_points,
    })
}
