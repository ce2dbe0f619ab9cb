/// Module that contains the held-out validation sample loader
pub mod sdf_test_set;

pub use sdf_test_set::*;
