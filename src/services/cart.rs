// src/services/cart.rs

//! Cart aggregation: the joined cart view, the add/remove mutations, and the
//! derived total. This layer owns the one-row-per-(session, product)
//! invariant, since the underlying store collaborator does not enforce it on
//! its own; every add goes through the store's atomic upsert.

use crate::errors::{AppError, Result};
use crate::models::CartItem;
use crate::money;
use crate::services::session::SessionService;
use crate::store::EntityStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The product fields the cart screen needs; a projection of `Product`.
#[derive(Debug, Clone, Serialize)]
pub struct CartProduct {
  pub id: Uuid,
  pub name: String,
  pub price_cents: i32,
  pub image_url: String,
}

/// One joined cart entry: the cart row plus its resolved product.
#[derive(Debug, Clone, Serialize)]
pub struct CartEntry {
  pub cart_item_id: Uuid,
  pub product: CartProduct,
  pub quantity: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartView {
  pub items: Vec<CartEntry>,
  pub total_cents: i64,
  pub total_display: String,
}

/// Sum of `price_cents * quantity` over the already-fetched entries. Pure;
/// no store round-trip. Integer cents keep the 2-fraction-digit result exact.
pub fn cart_total(entries: &[CartEntry]) -> i64 {
  entries
    .iter()
    .map(|entry| i64::from(entry.product.price_cents) * i64::from(entry.quantity))
    .sum()
}

#[derive(Clone)]
pub struct CartService {
  store: Arc<dyn EntityStore>,
  sessions: SessionService,
}

impl CartService {
  pub fn new(store: Arc<dyn EntityStore>) -> Self {
    Self {
      sessions: SessionService::new(store.clone()),
      store,
    }
  }

  /// The session's cart rows joined against products, oldest row first,
  /// with the derived total.
  ///
  /// Rows whose product has since been deleted are omitted rather than
  /// failing the whole view (products are referenced, not owned, and there
  /// is no cascade on product deletion).
  #[instrument(name = "cart_service::get_cart", skip(self, session_id), fields(session_id = %session_id))]
  pub async fn get_cart(&self, session_id: Uuid) -> Result<CartView> {
    self.sessions.resolve(session_id).await?;

    let rows = self.store.list_cart_items(session_id).await?;
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
      match self.store.get_product(row.product_id).await {
        Ok(product) => entries.push(CartEntry {
          cart_item_id: row.id,
          product: CartProduct {
            id: product.id,
            name: product.name,
            price_cents: product.price_cents,
            image_url: product.image_url,
          },
          quantity: row.quantity,
        }),
        Err(AppError::NotFound(_)) => {
          warn!(
            cart_item_id = %row.id,
            product_id = %row.product_id,
            "Skipping cart row whose product no longer exists."
          );
        }
        Err(other) => return Err(other),
      }
    }

    let total_cents = cart_total(&entries);
    Ok(CartView {
      total_display: money::format_cents(total_cents),
      items: entries,
      total_cents,
    })
  }

  /// Adds `quantity` of a product to the session's cart. If the product is
  /// already present the existing row's quantity is incremented; a second
  /// row is never created.
  #[instrument(
    name = "cart_service::add_to_cart",
    skip(self, session_id, product_id),
    fields(session_id = %session_id, product_id = %product_id)
  )]
  pub async fn add_to_cart(&self, session_id: Uuid, product_id: Uuid, quantity: i32) -> Result<CartItem> {
    self.sessions.resolve(session_id).await?;
    if quantity <= 0 {
      warn!("Rejecting add to cart with non-positive quantity {}.", quantity);
      return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
    }

    // The product must exist at add time. It may still be deleted later;
    // the cart view tolerates that via orphan-skip.
    self.store.get_product(product_id).await?;

    let item = self.store.upsert_cart_item(session_id, product_id, quantity).await?;
    info!(cart_item_id = %item.id, new_quantity = item.quantity, "Cart row added or incremented.");
    Ok(item)
  }

  /// Removes a cart row. Removing a row that is already gone counts as
  /// success, so a retried removal cannot surface a spurious error.
  #[instrument(name = "cart_service::remove_from_cart", skip(self, cart_item_id), fields(cart_item_id = %cart_item_id))]
  pub async fn remove_from_cart(&self, cart_item_id: Uuid) -> Result<()> {
    match self.store.delete_cart_item(cart_item_id).await {
      Ok(()) => Ok(()),
      Err(AppError::NotFound(_)) => {
        info!("Cart row was already absent; treating removal as success.");
        Ok(())
      }
      Err(other) => Err(other),
    }
  }

  /// Empties the session's cart, e.g. after a completed checkout. Returns
  /// how many rows were removed.
  #[instrument(name = "cart_service::clear_cart", skip(self, session_id), fields(session_id = %session_id))]
  pub async fn clear_cart(&self, session_id: Uuid) -> Result<u64> {
    self.sessions.resolve(session_id).await?;
    self.store.clear_cart_items(session_id).await
  }
}
