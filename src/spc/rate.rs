//! Rate chart (u-chart)

use crate::common::math;
use crate::models::chart::{ChartFamily, ControlChartPoint, ControlChartResult};
use crate::models::measurement::PeriodPoint;
use crate::models::metric::SigmaLevel;

/// Σnum / Σden over points that carry a sample size.
pub fn pooled_ratio(points: &[PeriodPoint]) -> Option<f64> {
    let (numerator, denominator) = points
        .iter()
        .filter(|p| p.sample_size().is_some())
        .filter_map(|p| p.counts)
        .fold((0.0, 0.0), |(n, d), c| (n + c.numerator, d + c.denominator));

    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Calculate a u-chart.
///
/// ū = Σnum / Σden over the baseline.
/// Limits per point: ū ± z·√(ū/nᵢ), lower limit floored at 0.
pub fn calculate_rate_chart(
    points: &[PeriodPoint],
    baseline: &[PeriodPoint],
    sigma_level: SigmaLevel,
    precision: u32,
) -> Option<ControlChartResult> {
    let u_bar = pooled_ratio(baseline)?;
    let z = sigma_level.z();
    let center_line = math::round_to(u_bar, precision);

    let chart_points = points
        .iter()
        .map(|point| match point.sample_size() {
            Some(n) => {
                let width = z * (u_bar.max(0.0) / n).sqrt();
                ControlChartPoint::limited(
                    point.period_start,
                    point.value,
                    center_line,
                    math::round_to((u_bar - width).max(0.0), precision),
                    math::round_to(u_bar + width, precision),
                )
            }
            None => ControlChartPoint::unlimited(point.period_start, point.value, center_line),
        })
        .collect();

    Some(ControlChartResult {
        family: ChartFamily::Rate,
        sigma_level,
        center_line,
        upper_limit: None,
        lower_limit: None,
        moving_range: None,
        baseline_len: baseline.len(),
        points: chart_points,
    })
}
