// Orders domain models
pub mod order;

pub use order::*;
