/// Module `error` contains the crate-wide error types.
///
/// `IoError` covers the loaders (file-open failures carrying the OS error,
/// truncated reads, malformed records); `ModelError` covers evaluation and
/// pipeline failures such as architecture/weight shape mismatches.
pub mod error;

/// Module `siren` contains the neural signed distance field itself.
///
/// A SIREN network is a stack of dense layers with periodic (sine)
/// activations between them. This module parses the text architecture
/// description into an ordered sequence of layer shapes, loads the flat
/// binary weight file shaped by that description, and runs the forward pass
/// mapping a 3D point to a scalar signed distance.
///
/// # Example
/// ```rust
/// use ndarray::{arr1, arr2};
/// use sirensdf::siren::Siren;
///
/// let model = Siren::from_parts(
///     vec![arr2(&[[1.0_f32, 2.0, 3.0]])],
///     vec![arr1(&[0.5_f32])],
/// )
/// .unwrap();
///
/// // forward is pure and deterministic
/// assert_eq!(model.forward([1.0, 1.0, 1.0]), 6.5);
/// ```
pub mod siren;

/// Module `dataset` contains the held-out validation data.
///
/// `SdfTestSet` loads the binary file of reference `(point, distance)` pairs
/// used to measure the accuracy of a loaded model.
pub mod dataset;

/// Module `grid` contains the sampling and AABB synthesis pipeline.
///
/// The pipeline generates a dense regular lattice over a cubic domain, drops
/// every point whose signed distance is strictly positive, and converts each
/// survivor into a padded axis-aligned box while accumulating a single global
/// extent. The surviving points keep their lattice iteration order, which is
/// what assigns each box its sequential primitive index.
///
/// # Example
/// ```rust
/// use sirensdf::grid::{generate_elements, sample_grid};
///
/// let points = sample_grid(1.0, 0.1);
/// assert_eq!(points.len(), 9261);
///
/// let (elements, extent) = generate_elements(&points[..1], 0.1, 0.01);
/// assert_eq!(elements[0].primitive_index, 0);
/// assert!(!extent.is_empty());
/// ```
pub mod grid;

/// Module `builder` contains the seam to the external acceleration-structure
/// builder.
///
/// The crate does not construct traversal structures itself; it produces the
/// ordered element list plus a finalized extent and hands both, together with
/// an explicit `BuilderConfig`, to an `AccelerationStructureBuilder`
/// implementation.
pub mod builder;

/// Module `metric` contains the evaluation metrics used by the validation
/// driver.
pub mod metric;

/// Module `validation` contains the accuracy check of a loaded model against
/// a held-out test set.
pub mod validation;

/// A convenience module that re-exports the most commonly used types and
/// functions from this crate.
pub mod prelude;

mod utility;

pub use error::{IoError, ModelError};
