/// Module that contains the architecture description parser
pub mod architecture;
/// Module that contains the loaded network and its forward pass
pub mod model;

pub use architecture::*;
pub use model::*;
