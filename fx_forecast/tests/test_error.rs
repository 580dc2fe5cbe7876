use fx_forecast::ForecastError;
use fx_math::MathError;
use std::error::Error;
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);
    assert!(matches!(forecast_error, ForecastError::IoError(_)));

    let math_error = MathError::InvalidInput("alpha".to_string());
    let forecast_error = ForecastError::from(math_error);
    assert!(matches!(forecast_error, ForecastError::Math(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InsufficientData {
        required: 216,
        actual: 10,
    };
    let error_string = error.to_string();
    assert!(error_string.contains("216"));
    assert!(error_string.contains("10"));

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error = ForecastError::from(io_error);
    // io failures display as themselves so a cause chain does not repeat them
    assert_eq!(error.to_string(), "permission denied");
    assert!(error.source().is_none());
}
