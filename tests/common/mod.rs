// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use glow_grace::models::{NewProduct, Product, Session};
use glow_grace::state::AppState;
use glow_grace::store::{EntityStore, MemoryStore};
use std::sync::Arc;
use uuid::Uuid;

pub fn memory_store() -> Arc<dyn EntityStore> {
  Arc::new(MemoryStore::new())
}

pub fn app_state() -> AppState {
  AppState::new(memory_store())
}

pub async fn insert_product(store: &Arc<dyn EntityStore>, name: &str, price_cents: i32, stock: i32) -> Product {
  store
    .insert_product(NewProduct {
      name: name.to_string(),
      description: Some(format!("{} (test fixture)", name)),
      price_cents,
      image_url: String::new(),
      stock_quantity: stock,
    })
    .await
    .expect("fixture product insert should succeed")
}

pub async fn new_session(store: &Arc<dyn EntityStore>) -> Session {
  store
    .insert_session(Uuid::new_v4())
    .await
    .expect("fixture session insert should succeed")
}
