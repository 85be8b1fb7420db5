// Addresses domain models
pub mod address;

pub use address::*;
