// src/store/memory.rs

use crate::errors::{AppError, Result};
use crate::models::{CartItem, NewProduct, Product, ProductPatch, Session};
use crate::store::{EntityStore, ProductOrder};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Default)]
struct Collections {
  products: HashMap<Uuid, Product>,
  cart_items: HashMap<Uuid, CartItem>,
  sessions: HashMap<Uuid, Session>,
}

/// In-process entity store. All three collections live behind one lock, so
/// `upsert_cart_item` is atomic with respect to other cart mutations.
#[derive(Default)]
pub struct MemoryStore {
  inner: RwLock<Collections>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl EntityStore for MemoryStore {
  async fn list_products(&self, order: ProductOrder) -> Result<Vec<Product>> {
    let guard = self.inner.read();
    let mut products: Vec<Product> = guard.products.values().cloned().collect();
    match order {
      ProductOrder::CreatedDesc => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
      ProductOrder::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    Ok(products)
  }

  async fn get_product(&self, id: Uuid) -> Result<Product> {
    self
      .inner
      .read()
      .products
      .get(&id)
      .cloned()
      .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))
  }

  async fn insert_product(&self, new: NewProduct) -> Result<Product> {
    let now = Utc::now();
    let product = Product {
      id: Uuid::new_v4(),
      name: new.name,
      description: new.description,
      price_cents: new.price_cents,
      image_url: new.image_url,
      stock_quantity: new.stock_quantity,
      created_at: now,
      updated_at: now,
    };
    self.inner.write().products.insert(product.id, product.clone());
    Ok(product)
  }

  async fn update_product(&self, id: Uuid, patch: ProductPatch) -> Result<Product> {
    let mut guard = self.inner.write();
    let product = guard
      .products
      .get_mut(&id)
      .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))?;

    if let Some(name) = patch.name {
      product.name = name;
    }
    if let Some(description) = patch.description {
      product.description = Some(description);
    }
    if let Some(price_cents) = patch.price_cents {
      product.price_cents = price_cents;
    }
    if let Some(image_url) = patch.image_url {
      product.image_url = image_url;
    }
    if let Some(stock_quantity) = patch.stock_quantity {
      product.stock_quantity = stock_quantity;
    }
    product.updated_at = Utc::now();
    Ok(product.clone())
  }

  async fn delete_product(&self, id: Uuid) -> Result<()> {
    self
      .inner
      .write()
      .products
      .remove(&id)
      .map(|_| ())
      .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))
  }

  async fn list_cart_items(&self, session_id: Uuid) -> Result<Vec<CartItem>> {
    let guard = self.inner.read();
    let mut items: Vec<CartItem> = guard
      .cart_items
      .values()
      .filter(|item| item.session_id == session_id)
      .cloned()
      .collect();
    items.sort_by(|a, b| a.added_at.cmp(&b.added_at));
    Ok(items)
  }

  async fn get_cart_item(&self, id: Uuid) -> Result<CartItem> {
    self
      .inner
      .read()
      .cart_items
      .get(&id)
      .cloned()
      .ok_or_else(|| AppError::NotFound(format!("Cart item with ID {} not found.", id)))
  }

  async fn upsert_cart_item(&self, session_id: Uuid, product_id: Uuid, add_quantity: i32) -> Result<CartItem> {
    if add_quantity <= 0 {
      return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
    }
    // Find-then-mutate happens under a single write lock, so two concurrent
    // adds for the same (session, product) cannot both take the insert path.
    let mut guard = self.inner.write();
    let existing = guard
      .cart_items
      .values_mut()
      .find(|item| item.session_id == session_id && item.product_id == product_id);

    match existing {
      Some(item) => {
        item.quantity += add_quantity;
        Ok(item.clone())
      }
      None => {
        let item = CartItem {
          id: Uuid::new_v4(),
          session_id,
          product_id,
          quantity: add_quantity,
          added_at: Utc::now(),
        };
        guard.cart_items.insert(item.id, item.clone());
        Ok(item)
      }
    }
  }

  async fn delete_cart_item(&self, id: Uuid) -> Result<()> {
    self
      .inner
      .write()
      .cart_items
      .remove(&id)
      .map(|_| ())
      .ok_or_else(|| AppError::NotFound(format!("Cart item with ID {} not found.", id)))
  }

  async fn clear_cart_items(&self, session_id: Uuid) -> Result<u64> {
    let mut guard = self.inner.write();
    let doomed: Vec<Uuid> = guard
      .cart_items
      .values()
      .filter(|item| item.session_id == session_id)
      .map(|item| item.id)
      .collect();
    for id in &doomed {
      guard.cart_items.remove(id);
    }
    Ok(doomed.len() as u64)
  }

  async fn get_session(&self, id: Uuid) -> Result<Session> {
    self
      .inner
      .read()
      .sessions
      .get(&id)
      .cloned()
      .ok_or_else(|| AppError::NotFound(format!("Session with ID {} not found.", id)))
  }

  async fn insert_session(&self, id: Uuid) -> Result<Session> {
    let session = Session {
      id,
      created_at: Utc::now(),
    };
    self.inner.write().sessions.insert(session.id, session.clone());
    Ok(session)
  }

  async fn delete_session(&self, id: Uuid) -> Result<()> {
    let mut guard = self.inner.write();
    guard
      .sessions
      .remove(&id)
      .ok_or_else(|| AppError::NotFound(format!("Session with ID {} not found.", id)))?;
    // Cart rows are owned by their session and go with it.
    guard.cart_items.retain(|_, item| item.session_id != id);
    Ok(())
  }
}
