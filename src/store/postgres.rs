// src/store/postgres.rs

use crate::errors::{AppError, Result};
use crate::models::{CartItem, NewProduct, Product, ProductPatch, Session};
use crate::store::{EntityStore, ProductOrder};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "id, name, description, price_cents, image_url, stock_quantity, created_at, updated_at";
const CART_ITEM_COLUMNS: &str = "id, session_id, product_id, quantity, added_at";

/// Postgres-backed entity store. Uses runtime-checked queries throughout;
/// `schema.sql` at the repository root defines the expected tables. The
/// cart upsert relies on the unique index over (session_id, product_id).
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl EntityStore for PgStore {
  #[instrument(name = "pg_store::list_products", skip(self))]
  async fn list_products(&self, order: ProductOrder) -> Result<Vec<Product>> {
    let order_by = match order {
      ProductOrder::CreatedDesc => "created_at DESC",
      ProductOrder::NameAsc => "name ASC",
    };
    let products = sqlx::query_as::<_, Product>(&format!(
      "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY {order_by}"
    ))
    .fetch_all(&self.pool)
    .await?;
    Ok(products)
  }

  #[instrument(name = "pg_store::get_product", skip(self, id), fields(product_id = %id))]
  async fn get_product(&self, id: Uuid) -> Result<Product> {
    sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))
  }

  #[instrument(name = "pg_store::insert_product", skip(self, new), fields(product_name = %new.name))]
  async fn insert_product(&self, new: NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(&format!(
      "INSERT INTO products (id, name, description, price_cents, image_url, stock_quantity, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW()) \
       RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(new.name)
    .bind(new.description)
    .bind(new.price_cents)
    .bind(new.image_url)
    .bind(new.stock_quantity)
    .fetch_one(&self.pool)
    .await?;
    Ok(product)
  }

  #[instrument(name = "pg_store::update_product", skip(self, id, patch), fields(product_id = %id))]
  async fn update_product(&self, id: Uuid, patch: ProductPatch) -> Result<Product> {
    sqlx::query_as::<_, Product>(&format!(
      "UPDATE products SET \
         name = COALESCE($2, name), \
         description = COALESCE($3, description), \
         price_cents = COALESCE($4, price_cents), \
         image_url = COALESCE($5, image_url), \
         stock_quantity = COALESCE($6, stock_quantity), \
         updated_at = NOW() \
       WHERE id = $1 \
       RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(id)
    .bind(patch.name)
    .bind(patch.description)
    .bind(patch.price_cents)
    .bind(patch.image_url)
    .bind(patch.stock_quantity)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))
  }

  #[instrument(name = "pg_store::delete_product", skip(self, id), fields(product_id = %id))]
  async fn delete_product(&self, id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Err(AppError::NotFound(format!("Product with ID {} not found.", id)));
    }
    Ok(())
  }

  #[instrument(name = "pg_store::list_cart_items", skip(self, session_id), fields(session_id = %session_id))]
  async fn list_cart_items(&self, session_id: Uuid) -> Result<Vec<CartItem>> {
    let items = sqlx::query_as::<_, CartItem>(&format!(
      "SELECT {CART_ITEM_COLUMNS} FROM cart_items WHERE session_id = $1 ORDER BY added_at ASC"
    ))
    .bind(session_id)
    .fetch_all(&self.pool)
    .await?;
    Ok(items)
  }

  #[instrument(name = "pg_store::get_cart_item", skip(self, id), fields(cart_item_id = %id))]
  async fn get_cart_item(&self, id: Uuid) -> Result<CartItem> {
    sqlx::query_as::<_, CartItem>(&format!("SELECT {CART_ITEM_COLUMNS} FROM cart_items WHERE id = $1"))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Cart item with ID {} not found.", id)))
  }

  #[instrument(
    name = "pg_store::upsert_cart_item",
    skip(self, session_id, product_id),
    fields(session_id = %session_id, product_id = %product_id)
  )]
  async fn upsert_cart_item(&self, session_id: Uuid, product_id: Uuid, add_quantity: i32) -> Result<CartItem> {
    if add_quantity <= 0 {
      return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
    }
    // Single statement, so the increment-or-insert cannot race: concurrent
    // adds serialize on the (session_id, product_id) unique index.
    let item = sqlx::query_as::<_, CartItem>(&format!(
      "INSERT INTO cart_items (id, session_id, product_id, quantity, added_at) \
       VALUES ($1, $2, $3, $4, NOW()) \
       ON CONFLICT (session_id, product_id) DO UPDATE \
       SET quantity = cart_items.quantity + EXCLUDED.quantity \
       RETURNING {CART_ITEM_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(session_id)
    .bind(product_id)
    .bind(add_quantity)
    .fetch_one(&self.pool)
    .await?;
    Ok(item)
  }

  #[instrument(name = "pg_store::delete_cart_item", skip(self, id), fields(cart_item_id = %id))]
  async fn delete_cart_item(&self, id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Err(AppError::NotFound(format!("Cart item with ID {} not found.", id)));
    }
    Ok(())
  }

  #[instrument(name = "pg_store::clear_cart_items", skip(self, session_id), fields(session_id = %session_id))]
  async fn clear_cart_items(&self, session_id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM cart_items WHERE session_id = $1")
      .bind(session_id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }

  #[instrument(name = "pg_store::get_session", skip(self, id), fields(session_id = %id))]
  async fn get_session(&self, id: Uuid) -> Result<Session> {
    sqlx::query_as::<_, Session>("SELECT id, created_at FROM sessions WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or_else(|| AppError::NotFound(format!("Session with ID {} not found.", id)))
  }

  #[instrument(name = "pg_store::insert_session", skip(self, id), fields(session_id = %id))]
  async fn insert_session(&self, id: Uuid) -> Result<Session> {
    let session =
      sqlx::query_as::<_, Session>("INSERT INTO sessions (id, created_at) VALUES ($1, NOW()) RETURNING id, created_at")
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
    Ok(session)
  }

  #[instrument(name = "pg_store::delete_session", skip(self, id), fields(session_id = %id))]
  async fn delete_session(&self, id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Err(AppError::NotFound(format!("Session with ID {} not found.", id)));
    }
    Ok(())
  }
}
