use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use fx_forecast::models::{Forecaster, HoltModel, SimpleSmoothingModel};
use fx_forecast::pipeline::{
    evaluate_test, project_future, split, summarize, ForecastPipeline, Horizon, TEST_WINDOW,
};
use fx_forecast::utils::synthetic_series;
use fx_forecast::{ForecastError, TimeSeries};
use rstest::rstest;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
}

fn series_of(len: usize) -> TimeSeries {
    synthetic_series(start(), len, 4.2, 0.01, len as u64).unwrap()
}

#[rstest]
#[case(216)]
#[case(217)]
#[case(500)]
#[case(1826)]
fn test_split_lengths(#[case] len: usize) {
    let series = series_of(len);
    let (train, test) = split(&series).unwrap();

    assert_eq!(test.len(), TEST_WINDOW);
    assert_eq!(train.len() + test.len(), series.len());
    assert_eq!(test.dates().last(), Some(&series.last_date()));
    if let Some(last_train) = train.dates().last() {
        assert!(*last_train < test.dates()[0]);
    }
}

#[test]
fn test_split_rejects_short_series() {
    let series = series_of(215);
    match split(&series) {
        Err(ForecastError::InsufficientData { required, actual }) => {
            assert_eq!(required, 216);
            assert_eq!(actual, 215);
        }
        other => panic!("expected insufficient data, got {:?}", other),
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(30)]
fn test_project_future_lengths(#[case] days: usize) {
    let series = series_of(300);
    let model = HoltModel::from_params(0.5, 0.2, 1.0, 4.3, 0.001).unwrap();

    let (forecast, dates) = project_future(&model, &series, Horizon::new(days).unwrap()).unwrap();

    assert_eq!(forecast.values().len(), days);
    assert_eq!(dates.len(), days);
    assert_eq!(dates[0], series.last_date() + Days::new(1));
    for pair in dates.windows(2) {
        assert_eq!(pair[1], pair[0] + Days::new(1));
    }
}

#[rstest]
#[case(0)]
#[case(31)]
fn test_horizon_bounds(#[case] days: usize) {
    assert!(Horizon::new(days).is_err());
    assert!(Horizon::try_from(days).is_err());
}

#[test]
fn test_horizon_default() {
    assert_eq!(Horizon::default().days(), 7);
}

#[test]
fn test_evaluate_test_matches_window() {
    let series = series_of(400);
    let model = SimpleSmoothingModel::from_params(0.3, 4.25).unwrap();
    let (_, test) = split(&series).unwrap();

    let forecast = evaluate_test(&model, &test).unwrap();
    assert_eq!(forecast.horizon(), TEST_WINDOW);
}

#[test]
fn test_summarize_favorable_scenario() {
    // last value 4.70, model continues 4.72, 4.74
    let dates = (0..216).map(|i| start() + Days::new(i)).collect();
    let mut values = vec![4.5; 216];
    values[215] = 4.70;
    let series = TimeSeries::new(dates, values).unwrap();
    let model = HoltModel::from_params(0.5, 0.5, 1.0, 4.70, 0.02).unwrap();

    let (future, _) = project_future(&model, &series, Horizon::new(2).unwrap()).unwrap();
    let summary = summarize(&series, &future).unwrap();

    assert_relative_eq!(summary.current_rate, 4.70);
    assert_relative_eq!(summary.avg_future, 4.73, epsilon = 1e-12);
    assert!(summary.avg_future > summary.current_rate);
    assert_relative_eq!(summary.delta(), 0.03, epsilon = 1e-12);
}

#[test]
fn test_pipeline_run_is_deterministic() {
    let series = series_of(365);
    let (model, _) = HoltModel::fit_auto(&series).unwrap();
    let model: &dyn Forecaster = &model;
    let pipeline = ForecastPipeline::new(&series, model);

    let first = pipeline.run(Horizon::new(14).unwrap()).unwrap();
    let second = pipeline.run(Horizon::new(14).unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.test_forecast.horizon(), TEST_WINDOW);
    assert_eq!(first.future_forecast.horizon(), 14);
    assert_eq!(first.future_dates.len(), 14);
    assert_eq!(first.current_rate, series.last_value());
    assert!(first.test_accuracy.rmse >= first.test_accuracy.mae * 0.999);
}

#[test]
fn test_pipeline_run_fails_on_short_series() {
    let series = series_of(100);
    let model = SimpleSmoothingModel::from_params(0.3, 4.25).unwrap();
    let pipeline = ForecastPipeline::new(&series, &model);

    assert!(matches!(
        pipeline.run(Horizon::default()),
        Err(ForecastError::InsufficientData { .. })
    ));
}
