//! Proportion chart (p-chart)
//!
//! Values are percentages, so the center line and limits are reported on
//! the 0-100 scale.

use crate::common::math;
use crate::models::chart::{ChartFamily, ControlChartPoint, ControlChartResult};
use crate::models::measurement::PeriodPoint;
use crate::models::metric::SigmaLevel;
use crate::spc::rate::pooled_ratio;

const PERCENT: f64 = 100.0;

/// Calculate a p-chart.
///
/// p̄ = Σnum / Σden over the baseline.
/// Limits per point: p̄ ± z·√(p̄(1−p̄)/nᵢ), clipped to [0, 1].
///
/// Returns `None` when the baseline carries no usable counts. Display
/// points without a sample size are emitted unlimited.
pub fn calculate_proportion_chart(
    points: &[PeriodPoint],
    baseline: &[PeriodPoint],
    sigma_level: SigmaLevel,
    precision: u32,
) -> Option<ControlChartResult> {
    let p_bar = pooled_ratio(baseline)?;
    let z = sigma_level.z();
    let variance = (p_bar * (1.0 - p_bar)).max(0.0);
    let center_line = math::round_to(p_bar * PERCENT, precision);

    let chart_points = points
        .iter()
        .map(|point| match point.sample_size() {
            Some(n) => {
                let width = z * (variance / n).sqrt();
                let lower = (p_bar - width).clamp(0.0, 1.0);
                let upper = (p_bar + width).clamp(0.0, 1.0);
                ControlChartPoint::limited(
                    point.period_start,
                    point.value,
                    center_line,
                    math::round_to(lower * PERCENT, precision),
                    math::round_to(upper * PERCENT, precision),
                )
            }
            None => ControlChartPoint::unlimited(point.period_start, point.value, center_line),
        })
        .collect();

    Some(ControlChartResult {
        family: ChartFamily::Proportion,
        sigma_level,
        center_line,
        upper_limit: None,
        lower_limit: None,
        moving_range: None,
        baseline_len: baseline.len(),
        points: chart_points,
    })
}
