//! Small numeric helpers shared by aggregation and control charts.

use std::cmp::Ordering;

/// Most decimals an `f64` can meaningfully carry.
pub const MAX_PRECISION: u32 = 15;

/// Round half away from zero to `places` decimals, capped at [`MAX_PRECISION`].
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places.min(MAX_PRECISION) as i32);
    let rounded = (value * factor).round() / factor;
    // collapse -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn round6(value: f64) -> f64 {
    round_to(value, 6)
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// `|x[i] - x[i-1]|` for consecutive values.
pub fn moving_ranges(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] - w[0]).abs()).collect()
}
