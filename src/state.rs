// src/state.rs
use crate::services::{CartService, CatalogService, SessionService};
use crate::store::EntityStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn EntityStore>,
  pub catalog: CatalogService,
  pub cart: CartService,
  pub sessions: SessionService,
}

impl AppState {
  pub fn new(store: Arc<dyn EntityStore>) -> Self {
    Self {
      catalog: CatalogService::new(store.clone()),
      cart: CartService::new(store.clone()),
      sessions: SessionService::new(store.clone()),
      store,
    }
  }
}
