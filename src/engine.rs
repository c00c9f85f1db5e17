//! Roll-up engine facade: bucket, aggregate, pick a baseline, chart.

use tracing::{debug, warn};

use crate::aggregation::weighted::aggregate_weighted_with_precision;
use crate::config::EngineConfig;
use crate::models::chart::EngineOutput;
use crate::models::measurement::{MeasurementRecord, PeriodPoint};
use crate::models::metric::{DataType, MetricDefinition};
use crate::spc::baseline::select_baseline;
use crate::spc::calculator::ControlChartCalculator;

/// Stateless apart from its configuration; safe to share across requests.
pub struct RollupEngine {
    config: EngineConfig,
    calculator: ControlChartCalculator,
}

impl RollupEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            calculator: ControlChartCalculator::new(config),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Aggregate `records` for `metric` and chart the resulting series.
    pub fn compute(&self, metric: &MetricDefinition, records: &[MeasurementRecord]) -> EngineOutput {
        let series = self.aggregate(metric, records);
        self.chart(metric, series)
    }

    /// Like [`compute`](Self::compute), but charts `pre_aggregated` when the
    /// records produce no periods at all.
    pub fn compute_with_fallback(
        &self,
        metric: &MetricDefinition,
        records: &[MeasurementRecord],
        pre_aggregated: &[PeriodPoint],
    ) -> EngineOutput {
        let mut series = self.aggregate(metric, records);

        if series.is_empty() && !pre_aggregated.is_empty() {
            debug!(
                metric = %metric.name,
                points = pre_aggregated.len(),
                "No records aggregated, using pre-aggregated series"
            );
            series = pre_aggregated
                .iter()
                .filter(|p| p.value.is_finite())
                .cloned()
                .collect();
            series.sort_by_key(|p| p.period_start);
        }

        self.chart(metric, series)
    }

    /// Bucket and aggregate only; no chart statistics.
    pub fn aggregate(
        &self,
        metric: &MetricDefinition,
        records: &[MeasurementRecord],
    ) -> Vec<PeriodPoint> {
        aggregate_weighted_with_precision(
            records,
            metric.data_type,
            metric.aggregation_type,
            self.config.precision,
        )
    }

    fn chart(&self, metric: &MetricDefinition, series: Vec<PeriodPoint>) -> EngineOutput {
        if metric.data_type == DataType::Unrecognized {
            warn!(
                metric = %metric.name,
                "Unrecognized data type, returning series without control chart"
            );
            return EngineOutput {
                series,
                chart: None,
            };
        }

        let baseline = select_baseline(&series, metric.baseline_start, metric.baseline_end);
        let chart = self.calculator.calculate_with_baseline(
            metric.data_type,
            &series,
            baseline,
            metric.sigma_level,
        );

        debug!(
            metric = %metric.name,
            data_type = ?metric.data_type,
            periods = series.len(),
            baseline = baseline.len(),
            charted = chart.is_some(),
            "Computed metric roll-up"
        );

        EngineOutput { series, chart }
    }
}

impl Default for RollupEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
