/// Module that contains the padded AABB element and extent accumulator
pub mod aabb;
/// Module that contains regular lattice generation
pub mod sampler;
/// Module that contains the SDF-based trimming pass
pub mod trimmer;

pub use aabb::*;
pub use sampler::*;
pub use trimmer::*;

/// Parameters of the grid sampling and AABB synthesis pipeline.
///
/// # Fields
///
/// - `max_abs_value` - Half-width of the cubic sampling domain
/// - `spacing` - Lattice step along each axis
/// - `eps` - Extra padding added to each box beyond half the spacing
///
/// The defaults cover the normalized `[-1, 1]^3` domain the models are
/// trained on, at a 0.1 step with 0.01 overlap padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub max_abs_value: f32,
    pub spacing: f32,
    pub eps: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            max_abs_value: 1.0,
            spacing: 0.1,
            eps: 0.01,
        }
    }
}
