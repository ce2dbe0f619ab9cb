use crate::error::{IoError, ModelError};
use crate::siren::architecture::SirenArchitecture;
use crate::utility::{read_f32s, warn_if_trailing_bytes};
use ndarray::{Array1, Array2};
use std::path::Path;

/// Frequency scale applied inside every sine activation, `sin(W0 * x)`.
pub const W0: f32 = 30.0;

/// A loaded SIREN network representing a signed distance field.
///
/// Holds one `(weight matrix, bias vector)` pair per dense layer, where the
/// weight matrix has `output` rows and `input` columns. The model is immutable
/// once loaded; `forward` is a pure function of the model and the query point.
///
/// # Example
/// ```rust
/// use ndarray::{arr1, arr2};
/// use sirensdf::siren::Siren;
///
/// // A single dense layer 3 -> 1 is a plane: d(p) = w . p + b
/// let model = Siren::from_parts(
///     vec![arr2(&[[1.0_f32, 2.0, 3.0]])],
///     vec![arr1(&[0.5_f32])],
/// )
/// .unwrap();
/// assert_eq!(model.forward([1.0, 1.0, 1.0]), 6.5);
/// ```
#[derive(Debug, Clone)]
pub struct Siren {
    weights: Vec<Array2<f32>>,
    biases: Vec<Array1<f32>>,
}

impl Siren {
    /// Builds a model from explicit per-layer weights and biases, validating
    /// the shapes before accepting them.
    ///
    /// # Parameters
    ///
    /// - `weights` - One matrix per dense layer, `output` rows by `input` columns
    /// - `biases` - One vector per dense layer, `output` entries
    ///
    /// # Returns
    ///
    /// * `Result<Siren, ModelError>` - The model, or `ShapeMismatch` when the
    ///   layers do not describe a 3 -> ... -> 1 stack
    pub fn from_parts(
        weights: Vec<Array2<f32>>,
        biases: Vec<Array1<f32>>,
    ) -> Result<Self, ModelError> {
        let model = Self { weights, biases };
        model.validate_architecture()?;
        Ok(model)
    }

    /// Loads weights from a flat binary file shaped by an already-parsed
    /// architecture.
    ///
    /// For each layer in order the file holds `output * input` row-major
    /// 32-bit floats followed by `output` bias floats, with a single
    /// sequential cursor and no per-layer header or padding. A file longer
    /// than the consumed bytes triggers a non-fatal warning, since it usually
    /// means the architecture and weight files disagree.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        architecture: &SirenArchitecture,
    ) -> Result<Self, IoError> {
        let path = path.as_ref();
        let mut reader = IoError::load_in_buf_reader(path)?;

        let mut weights = Vec::with_capacity(architecture.len());
        let mut biases = Vec::with_capacity(architecture.len());

        for shape in architecture.layers() {
            let raw = read_f32s(&mut reader, shape.output * shape.input, path)?;
            let matrix = Array2::from_shape_vec((shape.output, shape.input), raw)
                .expect("vector length matches the requested shape");
            weights.push(matrix);

            let raw = read_f32s(&mut reader, shape.output, path)?;
            biases.push(Array1::from_vec(raw));
        }

        warn_if_trailing_bytes(&mut reader, path);

        Self::from_parts(weights, biases).map_err(|e| IoError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Checks that the layer stack maps a 3-dimensional point to a scalar:
    /// at least one layer, first input width 3, each layer's output width
    /// matching the next layer's input width, biases sized to their layer,
    /// and a final output width of 1.
    pub fn validate_architecture(&self) -> Result<(), ModelError> {
        if self.weights.is_empty() {
            return Err(ModelError::ShapeMismatch(
                "model has no layers".to_string(),
            ));
        }
        if self.weights.len() != self.biases.len() {
            return Err(ModelError::ShapeMismatch(format!(
                "{} weight matrices but {} bias vectors",
                self.weights.len(),
                self.biases.len()
            )));
        }
        if self.weights[0].ncols() != 3 {
            return Err(ModelError::ShapeMismatch(format!(
                "first layer expects input width 3, got {}",
                self.weights[0].ncols()
            )));
        }
        for (i, (w, b)) in self.weights.iter().zip(&self.biases).enumerate() {
            if b.len() != w.nrows() {
                return Err(ModelError::ShapeMismatch(format!(
                    "layer {} has {} outputs but {} bias entries",
                    i,
                    w.nrows(),
                    b.len()
                )));
            }
            if i + 1 < self.weights.len() && self.weights[i + 1].ncols() != w.nrows() {
                return Err(ModelError::ShapeMismatch(format!(
                    "layer {} output width {} does not match layer {} input width {}",
                    i,
                    w.nrows(),
                    i + 1,
                    self.weights[i + 1].ncols()
                )));
            }
        }
        let last = self.weights.len() - 1;
        if self.weights[last].nrows() != 1 {
            return Err(ModelError::ShapeMismatch(format!(
                "final layer must produce a scalar, got output width {}",
                self.weights[last].nrows()
            )));
        }
        Ok(())
    }

    /// Evaluates the signed distance at a point.
    ///
    /// Every layer applies `W * x + b`; every layer except the last follows it
    /// with the elementwise sine activation `sin(W0 * v)`. The operation order
    /// (multiply, bias add, activation) and the `f32` accumulation are fixed
    /// so repeated calls are bit-identical.
    pub fn forward(&self, point: [f32; 3]) -> f32 {
        let mut current = Array1::from_vec(point.to_vec());
        let last = self.weights.len() - 1;

        for (i, (w, b)) in self.weights.iter().zip(&self.biases).enumerate() {
            current = w.dot(&current) + b;
            if i != last {
                current.mapv_inplace(|x| (W0 * x).sin());
            }
        }

        current[0]
    }

    /// Returns the number of dense layers.
    pub fn num_layers(&self) -> usize {
        self.weights.len()
    }

    /// Returns the per-layer weight matrices.
    pub fn weights(&self) -> &[Array2<f32>] {
        &self.weights
    }

    /// Returns the per-layer bias vectors.
    pub fn biases(&self) -> &[Array1<f32>] {
        &self.biases
    }
}
