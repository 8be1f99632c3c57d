// src/models/mod.rs

//! Contains data structures representing store entities.

// Declare child modules for each model
pub mod cart_item;
pub mod product;
pub mod session;

// Re-export the model structs for convenient access
pub use cart_item::CartItem;
pub use product::{NewProduct, Product, ProductPatch};
pub use session::Session;
