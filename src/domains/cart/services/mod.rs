// Cart domain services
pub mod cart_service;
pub mod cart_store;
pub mod state;

pub use cart_service::*;
pub use cart_store::*;
pub use state::*;
