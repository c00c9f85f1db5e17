//! Shared data models spanning the engine layers.

pub mod chart;
pub mod measurement;
pub mod metric;

pub use chart::{ChartFamily, ControlChartPoint, ControlChartResult, EngineOutput};
pub use measurement::{MeasurementRecord, PeriodPoint, RatioCounts};
pub use metric::{AggregationType, DataType, MetricDefinition, SigmaLevel};
