//! Summary statistics over rate series

use crate::{MathError, Result};

/// Arithmetic mean of a non-empty slice
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty series".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sum of squared differences between paired observations and predictions
pub fn sum_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    if actual.len() != predicted.len() {
        return Err(MathError::InvalidInput(format!(
            "Length mismatch: {} actual values vs {} predictions",
            actual.len(),
            predicted.len()
        )));
    }

    Ok(actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[4.72, 4.74]).unwrap(), 4.73, epsilon = 1e-12);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_sum_squared_error() {
        let sse = sum_squared_error(&[1.0, 2.0, 3.0], &[1.0, 2.5, 2.0]).unwrap();
        assert_relative_eq!(sse, 1.25);
        assert!(sum_squared_error(&[1.0], &[1.0, 2.0]).is_err());
    }
}
