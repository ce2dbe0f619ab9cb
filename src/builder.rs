use crate::error::ModelError;
use crate::grid::{Element, Extent, GridParams, generate_elements, sample_grid, trim_to_surface};
use crate::siren::Siren;
use std::path::PathBuf;

/// Configuration handed to the acceleration-structure builder alongside the
/// geometry, instead of process-wide mutable state.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Directory the builder loads its own resources from, if it needs any.
    pub resource_dir: Option<PathBuf>,
}

/// Consumer of the produced AABB artifact.
///
/// Implementations take ownership of the element list and the finalized
/// extent and construct whatever traversal structure they need; construction
/// failures surface as `ModelError::ProcessingError`.
pub trait AccelerationStructureBuilder {
    fn build(
        &mut self,
        elements: Vec<Element>,
        extent: Extent,
        config: &BuilderConfig,
    ) -> Result<(), ModelError>;
}

/// Builder that accepts the artifact and records its summary without
/// constructing anything. Stands in where no engine backend is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBuilder {
    pub element_count: usize,
    pub extent: Extent,
}

impl AccelerationStructureBuilder for NoopBuilder {
    fn build(
        &mut self,
        elements: Vec<Element>,
        extent: Extent,
        _config: &BuilderConfig,
    ) -> Result<(), ModelError> {
        self.element_count = elements.len();
        self.extent = extent;
        Ok(())
    }
}

/// Runs the full grid pipeline (sample, trim, AABB synthesis) and hands the
/// resulting elements and extent to the builder.
pub fn build_with<B: AccelerationStructureBuilder>(
    model: &Siren,
    params: &GridParams,
    builder: &mut B,
    config: &BuilderConfig,
) -> Result<(), ModelError> {
    let points = sample_grid(params.max_abs_value, params.spacing);
    let surviving = trim_to_surface(&points, model);
    let (elements, extent) = generate_elements(&surviving, params.spacing, params.eps);
    builder.build(elements, extent, config)
}
