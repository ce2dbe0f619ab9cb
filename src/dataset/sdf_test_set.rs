use crate::error::{IoError, ModelError};
use crate::utility::{read_f32s, read_i32, warn_if_trailing_bytes};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::path::Path;

/// Held-out reference samples used to validate a loaded model.
///
/// Each sample pairs a 3D point with the reference signed distance measured at
/// that point. The binary layout is `[i32 count][count * 3 f32 points in
/// point-major order][count f32 distances]` with no header and platform-native
/// endianness.
#[derive(Debug, Clone)]
pub struct SdfTestSet {
    points: Array2<f32>,
    distances: Array1<f32>,
}

impl SdfTestSet {
    /// Builds a test set from an `N x 3` point matrix and `N` reference
    /// distances.
    ///
    /// # Returns
    ///
    /// * `Result<SdfTestSet, ModelError>` - The test set, or
    ///   `InputValidationError` when the shapes disagree
    pub fn from_parts(points: Array2<f32>, distances: Array1<f32>) -> Result<Self, ModelError> {
        if points.ncols() != 3 {
            return Err(ModelError::InputValidationError(format!(
                "points must have 3 columns, got {}",
                points.ncols()
            )));
        }
        if points.nrows() != distances.len() {
            return Err(ModelError::InputValidationError(format!(
                "{} points but {} reference distances",
                points.nrows(),
                distances.len()
            )));
        }
        Ok(Self { points, distances })
    }

    /// Loads a test set from its binary file.
    ///
    /// Trailing bytes after the expected records trigger a non-fatal warning.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let path = path.as_ref();
        let mut reader = IoError::load_in_buf_reader(path)?;

        let count = read_i32(&mut reader, path)?;
        if count < 0 {
            return Err(IoError::Parse {
                path: path.to_path_buf(),
                message: format!("negative sample count {}", count),
            });
        }
        let count = count as usize;

        let raw = read_f32s(&mut reader, count * 3, path)?;
        let points = Array2::from_shape_vec((count, 3), raw)
            .expect("vector length matches the requested shape");
        let distances = Array1::from_vec(read_f32s(&mut reader, count, path)?);

        warn_if_trailing_bytes(&mut reader, path);
        Ok(Self { points, distances })
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` when the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the `N x 3` point matrix.
    pub fn points(&self) -> ArrayView2<'_, f32> {
        self.points.view()
    }

    /// Returns the reference distances, aligned by index with the points.
    pub fn distances(&self) -> ArrayView1<'_, f32> {
        self.distances.view()
    }

    /// Iterates over `(point, reference distance)` samples in file order.
    pub fn samples(&self) -> impl Iterator<Item = ([f32; 3], f32)> + '_ {
        self.points
            .outer_iter()
            .zip(self.distances.iter())
            .map(|(row, &d)| ([row[0], row[1], row[2]], d))
    }
}
