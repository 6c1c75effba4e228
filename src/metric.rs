use crate::error::ModelError;
use ndarray::Data;
use ndarray::prelude::*;

/// Calculates the Mean Squared Error between ground-truth and predicted values.
///
/// Mean Squared Error measures the average of the squared differences between predicted values and ground truth values.
///
/// # Parameters
///
/// - `y_true` - Ground-truth values
/// - `y_pred` - Predicted values
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rusty_mlp::metric::mean_squared_error;
///
/// let actual = array![3.0, -0.5, 2.0, 7.0];
/// let predicted = array![2.5, 0.0, 2.1, 7.8];
/// let mse = mean_squared_error(&actual, &predicted).unwrap();
/// // MSE = (0.25 + 0.25 + 0.01 + 0.64) / 4 = 0.2875
/// assert!((mse - 0.2875).abs() < 1e-10);
/// ```
///
/// # Returns
///
/// - `Ok(f64)` - Mean squared error (0.0 when both arrays are empty)
/// - `Err(ModelError::DimensionMismatch)` - If the arrays have different lengths
pub fn mean_squared_error<S1, S2>(
    y_true: &ArrayBase<S1, Ix1>,
    y_pred: &ArrayBase<S2, Ix1>,
) -> Result<f64, ModelError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if y_true.len() != y_pred.len() {
        return Err(ModelError::dimension_mismatch(
            "mean squared error",
            y_true.len(),
            y_pred.len(),
        ));
    }

    let n = y_true.len();
    if n == 0 {
        return Ok(0.0);
    }

    let sum_squared_diff = y_true
        .iter()
        .zip(y_pred.iter())
        .fold(0.0, |acc, (&actual, &pred)| {
            let error = actual - pred;
            acc + error * error
        });

    Ok(sum_squared_diff / n as f64)
}

/// Calculates the proportion of predictions that exactly match their labels.
///
/// Intended for post-processed (thresholded) network outputs.
///
/// # Parameters
///
/// - `predicted` - Predicted labels
/// - `actual` - Ground-truth labels
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rusty_mlp::metric::accuracy;
///
/// let predicted = array![0.0, 1.0, 1.0];
/// let actual = array![0.0, 0.0, 1.0];
/// let acc = accuracy(&predicted, &actual).unwrap();
/// assert!((acc - 0.6666666666666667).abs() < 1e-6);
/// ```
///
/// # Returns
///
/// - `Ok(f64)` - Accuracy in the range \[0.0, 1.0\]
/// - `Err(ModelError::DimensionMismatch)` - If the arrays have different lengths
/// - `Err(ModelError::InputValidationError)` - If the arrays are empty
pub fn accuracy<S1, S2>(
    predicted: &ArrayBase<S1, Ix1>,
    actual: &ArrayBase<S2, Ix1>,
) -> Result<f64, ModelError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if predicted.len() != actual.len() {
        return Err(ModelError::dimension_mismatch(
            "accuracy",
            actual.len(),
            predicted.len(),
        ));
    }

    if predicted.is_empty() {
        return Err(ModelError::InputValidationError(
            "Input arrays must not be empty".to_string(),
        ));
    }

    let correct_predictions = predicted
        .iter()
        .zip(actual.iter())
        .filter(|&(p, a)| (p - a).abs() < f64::EPSILON)
        .count();

    Ok(correct_predictions as f64 / predicted.len() as f64)
}
