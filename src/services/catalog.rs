// src/services/catalog.rs

//! Catalog mutations with field validation. The admin screens submit dollar
//! amounts; everything past this boundary is integer cents.

use crate::errors::{AppError, Result};
use crate::models::{NewProduct, Product, ProductPatch};
use crate::money;
use crate::store::{EntityStore, ProductOrder};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Fields accepted when creating a product. Everything except the name may
/// be omitted; a freshly created product defaults to empty text, zero price
/// and zero stock, matching the blank-then-edit admin flow.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateProduct {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub price: f64,
  #[serde(default)]
  pub image_url: String,
  #[serde(default)]
  pub stock_quantity: i32,
}

impl CreateProduct {
  fn validated(self) -> Result<NewProduct> {
    let name = self.name.trim().to_string();
    if name.is_empty() {
      return Err(AppError::Validation("Product name must not be empty.".to_string()));
    }
    if self.stock_quantity < 0 {
      return Err(AppError::Validation(
        "Stock quantity must not be negative.".to_string(),
      ));
    }
    let price_cents = money::dollars_to_cents(self.price)?;
    Ok(NewProduct {
      name,
      description: self.description,
      price_cents,
      image_url: self.image_url,
      stock_quantity: self.stock_quantity,
    })
  }
}

/// Fields accepted when editing a product; omitted fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateProduct {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<f64>,
  pub image_url: Option<String>,
  pub stock_quantity: Option<i32>,
}

impl UpdateProduct {
  fn validated(self) -> Result<ProductPatch> {
    let name = match self.name {
      Some(raw) => {
        let name = raw.trim().to_string();
        if name.is_empty() {
          return Err(AppError::Validation("Product name must not be empty.".to_string()));
        }
        Some(name)
      }
      None => None,
    };
    if let Some(stock) = self.stock_quantity {
      if stock < 0 {
        return Err(AppError::Validation(
          "Stock quantity must not be negative.".to_string(),
        ));
      }
    }
    let price_cents = match self.price {
      Some(dollars) => Some(money::dollars_to_cents(dollars)?),
      None => None,
    };
    Ok(ProductPatch {
      name,
      description: self.description,
      price_cents,
      image_url: self.image_url,
      stock_quantity: self.stock_quantity,
    })
  }
}

#[derive(Clone)]
pub struct CatalogService {
  store: Arc<dyn EntityStore>,
}

impl CatalogService {
  pub fn new(store: Arc<dyn EntityStore>) -> Self {
    Self { store }
  }

  #[instrument(name = "catalog_service::list_products", skip(self))]
  pub async fn list_products(&self, order: ProductOrder) -> Result<Vec<Product>> {
    self.store.list_products(order).await
  }

  #[instrument(name = "catalog_service::get_product", skip(self, id), fields(product_id = %id))]
  pub async fn get_product(&self, id: Uuid) -> Result<Product> {
    self.store.get_product(id).await
  }

  #[instrument(name = "catalog_service::create_product", skip(self, input))]
  pub async fn create_product(&self, input: CreateProduct) -> Result<Product> {
    let new = input.validated()?;
    let product = self.store.insert_product(new).await?;
    info!(product_id = %product.id, "Product created.");
    Ok(product)
  }

  #[instrument(name = "catalog_service::update_product", skip(self, id, input), fields(product_id = %id))]
  pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> Result<Product> {
    let patch = input.validated()?;
    let product = self.store.update_product(id, patch).await?;
    info!(product_id = %product.id, "Product updated.");
    Ok(product)
  }

  /// Deletes a product. Cart rows referencing it are deliberately left
  /// alone; they disappear from cart views via orphan-skip.
  #[instrument(name = "catalog_service::delete_product", skip(self, id), fields(product_id = %id))]
  pub async fn delete_product(&self, id: Uuid) -> Result<()> {
    self.store.delete_product(id).await?;
    info!(product_id = %id, "Product deleted.");
    Ok(())
  }
}
