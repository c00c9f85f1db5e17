//! Unit tests for engine configuration

use spc_rollup::config::{EngineConfig, IndividualsEstimator};

#[test]
fn test_config_default() {
    let config = EngineConfig::default();
    assert_eq!(config.precision, 6);
    assert_eq!(config.min_chart_points, 2);
    assert_eq!(config.individuals_estimator, IndividualsEstimator::AverageMovingRange);
}

#[test]
fn test_with_precision_is_capped() {
    assert_eq!(EngineConfig::default().with_precision(4).precision, 4);
    assert_eq!(EngineConfig::default().with_precision(400).precision, 15);
}

#[test]
fn test_estimator_from_str() {
    assert_eq!(
        "median".parse::<IndividualsEstimator>().unwrap(),
        IndividualsEstimator::MedianMovingRange
    );
    assert!("ewma".parse::<IndividualsEstimator>().is_err());
}

// Single test so env mutations do not race each other.
#[test]
fn test_config_from_env() {
    std::env::set_var("SPC_PRECISION", "4");
    std::env::set_var("SPC_INDIVIDUALS_ESTIMATOR", "median");
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.precision, 4);
    assert_eq!(config.individuals_estimator, IndividualsEstimator::MedianMovingRange);

    std::env::set_var("SPC_MIN_CHART_POINTS", "1");
    assert!(EngineConfig::from_env().is_err());

    std::env::remove_var("SPC_PRECISION");
    std::env::remove_var("SPC_INDIVIDUALS_ESTIMATOR");
    std::env::remove_var("SPC_MIN_CHART_POINTS");
}
