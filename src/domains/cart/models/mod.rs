// Cart domain models
pub mod cart;

pub use cart::*;
