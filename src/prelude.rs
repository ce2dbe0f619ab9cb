pub use crate::builder::{AccelerationStructureBuilder, BuilderConfig, NoopBuilder, build_with};
pub use crate::dataset::SdfTestSet;
pub use crate::error::{IoError, ModelError};
pub use crate::grid::{
    Element, Extent, GridParams, generate_elements, grid_size, sample_grid, trim_to_surface,
};
pub use crate::metric::mean_absolute_error;
pub use crate::siren::{LayerShape, Siren, SirenArchitecture, W0};
pub use crate::validation::mean_distance_error;
