// Addresses domain services
pub mod address_service;
pub mod state;

pub use address_service::*;
pub use state::*;
