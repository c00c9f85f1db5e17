//! Baseline window selection

use chrono::{DateTime, Utc};

use crate::models::measurement::PeriodPoint;

/// Below this many points a baseline cannot estimate center or spread.
pub const MIN_BASELINE_POINTS: usize = 2;

/// Sub-series used to estimate control statistics.
///
/// `series` must be chronological. Keeps points with
/// `start <= period_start <= end`; a missing bound is open on that side.
/// With no bounds, or when the window holds fewer than
/// [`MIN_BASELINE_POINTS`], the whole series is the baseline.
pub fn select_baseline<'a>(
    series: &'a [PeriodPoint],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> &'a [PeriodPoint] {
    if start.is_none() && end.is_none() {
        return series;
    }

    let from = start.map_or(0, |s| series.partition_point(|p| p.period_start < s));
    let to = end.map_or(series.len(), |e| series.partition_point(|p| p.period_start <= e));

    if to <= from || to - from < MIN_BASELINE_POINTS {
        return series;
    }

    &series[from..to]
}
