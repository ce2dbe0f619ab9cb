use crate::dataset::SdfTestSet;
use crate::metric::mean_absolute_error;
use crate::siren::Siren;
use ndarray::Array1;

/// Evaluates the model at every held-out sample and reports the mean absolute
/// distance error against the reference distances.
///
/// Samples are evaluated serially in file order; the result is a pure
/// function of the model and the test set.
pub fn mean_distance_error(model: &Siren, test_set: &SdfTestSet) -> f32 {
    let predicted: Array1<f32> = test_set
        .samples()
        .map(|(point, _)| model.forward(point))
        .collect();

    mean_absolute_error(predicted.view(), test_set.distances())
}
