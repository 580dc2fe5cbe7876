use approx::assert_relative_eq;
use chrono::NaiveDate;
use fx_forecast::models::artifact::{load_model, save_model, ModelArtifact, ModelSpec};
use fx_forecast::models::{Forecaster, HoltModel, SimpleSmoothingModel};
use fx_forecast::utils::synthetic_series;
use fx_forecast::ForecastError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_holt_artifact() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"format_version":1,"model":{{"kind":"holt","alpha":0.9,"beta":0.1,"level":4.70,"trend":0.02}}}}"#
    )
    .unwrap();

    let model = load_model(file.path()).unwrap();
    let forecast = model.forecast(2).unwrap();

    assert_eq!(forecast.horizon(), 2);
    assert_relative_eq!(forecast.values()[0], 4.72, epsilon = 1e-12);
    assert_relative_eq!(forecast.values()[1], 4.74, epsilon = 1e-12);
}

#[test]
fn test_load_model_failures() {
    assert!(matches!(
        load_model("no_such_model.json"),
        Err(ForecastError::IoError(_))
    ));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\u{80}\u{04}pickle").unwrap();
    assert!(matches!(
        load_model(file.path()),
        Err(ForecastError::ModelFormat(_))
    ));
}

#[test]
fn test_fit_save_load_matches() {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let series = synthetic_series(start, 300, 4.4, 0.01, 42).unwrap();

    let (model, fit) = HoltModel::fit_auto(&series).unwrap();
    let artifact = ModelArtifact::from_holt_fit(&fit, &series);
    assert_eq!(artifact.fitted_on.as_ref().unwrap().observations, 300);

    let file = NamedTempFile::new().unwrap();
    save_model(file.path(), &artifact).unwrap();
    let restored = load_model(file.path()).unwrap();

    let expected = model.forecast(10).unwrap();
    let actual = restored.forecast(10).unwrap();
    for (e, a) in expected.values().iter().zip(actual.values()) {
        assert_relative_eq!(*e, *a, epsilon = 1e-9);
    }
}

#[test]
fn test_simple_model_through_artifact() {
    let artifact = ModelArtifact::new(ModelSpec::Simple {
        alpha: 0.4,
        level: 4.55,
    });
    let model = artifact.into_forecaster().unwrap();
    let forecast = model.forecast(5).unwrap();
    assert!(forecast.values().iter().all(|v| *v == 4.55));

    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let series = synthetic_series(start, 100, 4.4, 0.01, 3).unwrap();
    let (fitted, sse) = SimpleSmoothingModel::fit_auto(&series).unwrap();
    assert!(sse >= 0.0);
    assert!(fitted.alpha() > 0.0 && fitted.alpha() < 1.0);
}

#[test]
fn test_forecast_is_deterministic() {
    let model = HoltModel::from_params(0.5, 0.3, 0.98, 4.6, -0.01).unwrap();
    assert_eq!(model.forecast(30).unwrap(), model.forecast(30).unwrap());
}
