// Shared services
pub mod client;

pub use client::*;
