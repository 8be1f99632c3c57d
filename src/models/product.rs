// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog product. Prices are integer cents; the admin boundary converts
/// from dollar amounts (see `money`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i32,
  // Stored verbatim; not validated as a real URI. May be empty.
  pub image_url: String,
  pub stock_quantity: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Validated fields for a product insert. Produced by
/// `services::catalog::CreateProduct::validated`; the store assigns id and
/// timestamps.
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i32,
  pub image_url: String,
  pub stock_quantity: i32,
}

/// Partial update for a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price_cents: Option<i32>,
  pub image_url: Option<String>,
  pub stock_quantity: Option<i32>,
}
