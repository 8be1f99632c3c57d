// src/store/mod.rs

//! The entity store contract and its implementations.
//!
//! Three collections exist: products, cart items, and sessions. Every
//! operation is a single round-trip with no retries; failures surface either
//! as a domain error (`NotFound`, `Validation`) or as `Transport`.
//!
//! The store, not the cart service, owns the increment-or-insert for cart
//! rows: a read-then-write at the service layer would race with itself under
//! concurrent adds from the same session, so `upsert_cart_item` must be
//! atomic in every implementation.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::errors::Result;
use crate::models::{CartItem, NewProduct, Product, ProductPatch, Session};
use async_trait::async_trait;
use uuid::Uuid;

/// Orderings supported by `list_products`. The admin screens read newest
/// first; the storefront can also ask for an alphabetical listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductOrder {
  #[default]
  CreatedDesc,
  NameAsc,
}

#[async_trait]
pub trait EntityStore: Send + Sync {
  // --- products ---
  async fn list_products(&self, order: ProductOrder) -> Result<Vec<Product>>;
  async fn get_product(&self, id: Uuid) -> Result<Product>;
  async fn insert_product(&self, new: NewProduct) -> Result<Product>;
  async fn update_product(&self, id: Uuid, patch: ProductPatch) -> Result<Product>;
  /// No cascade: cart rows referencing the product are left in place and
  /// skipped on the next cart read.
  async fn delete_product(&self, id: Uuid) -> Result<()>;

  // --- cart items ---
  /// Rows for one session, oldest first.
  async fn list_cart_items(&self, session_id: Uuid) -> Result<Vec<CartItem>>;
  async fn get_cart_item(&self, id: Uuid) -> Result<CartItem>;
  /// Atomic increment-or-insert keyed on (session_id, product_id):
  /// increments the existing row's quantity by `add_quantity`, or inserts a
  /// fresh row with that quantity. `add_quantity` must be positive.
  async fn upsert_cart_item(&self, session_id: Uuid, product_id: Uuid, add_quantity: i32) -> Result<CartItem>;
  async fn delete_cart_item(&self, id: Uuid) -> Result<()>;
  /// Removes every row owned by the session, returning how many were removed.
  async fn clear_cart_items(&self, session_id: Uuid) -> Result<u64>;

  // --- sessions ---
  async fn get_session(&self, id: Uuid) -> Result<Session>;
  /// Records a session identifier issued by the auth collaborator.
  async fn insert_session(&self, id: Uuid) -> Result<Session>;
  /// Removes the session together with the cart rows it owns.
  async fn delete_session(&self, id: Uuid) -> Result<()>;
}
