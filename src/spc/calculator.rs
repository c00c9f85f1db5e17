//! Chart-family dispatch

use tracing::debug;

use crate::config::EngineConfig;
use crate::models::chart::{ChartFamily, ControlChartResult};
use crate::models::measurement::PeriodPoint;
use crate::models::metric::{DataType, SigmaLevel};
use crate::spc::individuals::calculate_individuals_chart;
use crate::spc::proportion::calculate_proportion_chart;
use crate::spc::rate::calculate_rate_chart;

pub struct ControlChartCalculator {
    config: EngineConfig,
}

impl ControlChartCalculator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Chart `points` using the whole series as its own baseline.
    pub fn calculate(
        &self,
        data_type: DataType,
        points: &[PeriodPoint],
        sigma_level: SigmaLevel,
    ) -> Option<ControlChartResult> {
        self.calculate_with_baseline(data_type, points, points, sigma_level)
    }

    /// Estimate center and limits from `baseline`, apply them to `points`.
    ///
    /// `None` when there are too few points, the data type has no chart
    /// family, or a ratio baseline carries no counts.
    pub fn calculate_with_baseline(
        &self,
        data_type: DataType,
        points: &[PeriodPoint],
        baseline: &[PeriodPoint],
        sigma_level: SigmaLevel,
    ) -> Option<ControlChartResult> {
        if points.len() < self.config.min_chart_points
            || baseline.len() < self.config.min_chart_points
        {
            debug!(
                points = points.len(),
                baseline = baseline.len(),
                "Not enough points for control statistics"
            );
            return None;
        }

        let family = data_type.chart_family()?;
        let precision = self.config.precision;

        match family {
            ChartFamily::Proportion => {
                calculate_proportion_chart(points, baseline, sigma_level, precision)
            }
            ChartFamily::Rate => calculate_rate_chart(points, baseline, sigma_level, precision),
            ChartFamily::Individuals => calculate_individuals_chart(
                points,
                baseline,
                sigma_level,
                self.config.individuals_estimator,
                precision,
            ),
        }
    }
}

impl Default for ControlChartCalculator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
