// src/seed.rs

//! Demo data for running the server without an external auth collaborator:
//! a handful of catalog products and one pre-registered session whose id is
//! logged at startup for use in the `X-Session-Id` header.

use crate::errors::Result;
use crate::models::NewProduct;
use crate::store::EntityStore;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn seed_demo_data(store: &Arc<dyn EntityStore>) -> Result<Uuid> {
  let products = [
    NewProduct {
      name: "Radiance Face Serum".to_string(),
      description: Some("Brightening vitamin C serum for daily use.".to_string()),
      price_cents: 4999,
      image_url: "https://images.unsplash.com/photo-1620916566398-39f1143ab7be".to_string(),
      stock_quantity: 25,
    },
    NewProduct {
      name: "Velvet Matte Lipstick".to_string(),
      description: Some("Long-wear matte finish in warm rosewood.".to_string()),
      price_cents: 2499,
      image_url: "https://images.unsplash.com/photo-1586495777744-4413f21062fa".to_string(),
      stock_quantity: 40,
    },
    NewProduct {
      name: "Hydra Silk Moisturizer".to_string(),
      description: Some("Lightweight hyaluronic day cream.".to_string()),
      price_cents: 3250,
      image_url: "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881".to_string(),
      stock_quantity: 18,
    },
    NewProduct {
      name: "Botanical Cleansing Oil".to_string(),
      description: None,
      price_cents: 1895,
      image_url: String::new(),
      stock_quantity: 0,
    },
  ];

  for new in products {
    let product = store.insert_product(new).await?;
    info!(product_id = %product.id, name = %product.name, "Seeded demo product.");
  }

  let session = store.insert_session(Uuid::new_v4()).await?;
  info!(
    session_id = %session.id,
    "Seeded demo session; pass this id in the X-Session-Id header."
  );
  Ok(session.id)
}
