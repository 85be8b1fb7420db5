// Domain modules
pub mod addresses;
pub mod auth;
pub mod cart;
pub mod menu;
pub mod orders;
