use approx::assert_relative_eq;
use fx_forecast::metrics::forecast_accuracy;

#[test]
fn test_forecast_accuracy() {
    let forecast = [4.0, 4.0, 4.0, 4.0];
    let actual = [4.1, 3.9, 4.2, 3.8];

    let accuracy = forecast_accuracy(&forecast, &actual).unwrap();

    assert_relative_eq!(accuracy.mae, 0.15, epsilon = 1e-9);
    assert_relative_eq!(accuracy.mse, 0.025, epsilon = 1e-9);
    assert_relative_eq!(accuracy.rmse, 0.025_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(accuracy.bias, 0.0, epsilon = 1e-9);
    assert!(accuracy.mape > 3.0 && accuracy.mape < 4.0);
    assert!(accuracy.residual_std > 0.0);

    let printed = accuracy.to_string();
    assert!(printed.contains("RMSE"));
}

#[test]
fn test_forecast_accuracy_validation() {
    assert!(forecast_accuracy(&[], &[]).is_err());
    assert!(forecast_accuracy(&[1.0], &[1.0, 2.0]).is_err());
}

#[test]
fn test_single_point_has_zero_spread() {
    let accuracy = forecast_accuracy(&[4.0], &[4.5]).unwrap();
    assert_relative_eq!(accuracy.residual_std, 0.0);
    assert_relative_eq!(accuracy.bias, 0.5);
}
