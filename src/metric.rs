use ndarray::ArrayView1;

/// Calculates the Mean Absolute Error between predicted and reference values.
///
/// The sum of absolute differences accumulates in `f32`, matching the numeric
/// width of the distances it measures.
///
/// # Parameters
///
/// - `predictions` - Predicted values for each sample
/// - `targets` - Reference values for each sample
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use sirensdf::metric::mean_absolute_error;
///
/// let predictions = array![2.0_f32, 3.0, 4.0];
/// let targets = array![1.0_f32, 2.0, 3.0];
/// let mae = mean_absolute_error(predictions.view(), targets.view());
/// // MAE = (|2 - 1| + |3 - 2| + |4 - 3|) / 3 = 1.0
/// assert!((mae - 1.0).abs() < 1e-6);
/// ```
///
/// # Returns
///
/// - `f32` - Mean absolute error (returns 0.0 when the input arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn mean_absolute_error(predictions: ArrayView1<f32>, targets: ArrayView1<f32>) -> f32 {
    if predictions.is_empty() && targets.is_empty() {
        return 0.0;
    }

    if predictions.len() != targets.len() {
        panic!(
            "Prediction and target arrays must have the same length. Predicted: {}, Actual: {}",
            predictions.len(),
            targets.len()
        );
    }

    let sum_absolute_errors = predictions
        .iter()
        .zip(targets.iter())
        .fold(0.0_f32, |acc, (&pred, &target)| acc + (pred - target).abs());

    sum_absolute_errors / predictions.len() as f32
}
