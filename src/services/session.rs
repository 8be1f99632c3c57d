// src/services/session.rs

//! Client side of the external auth collaborator: sessions are issued
//! elsewhere; this service only resolves presented identifiers against the
//! sessions collection.

use crate::errors::{AppError, Result};
use crate::models::Session;
use crate::store::EntityStore;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct SessionService {
  store: Arc<dyn EntityStore>,
}

impl SessionService {
  pub fn new(store: Arc<dyn EntityStore>) -> Self {
    Self { store }
  }

  /// Resolves a presented session identifier. An unknown identifier is an
  /// authentication failure, not a plain missing-entity condition: the
  /// caller presented credentials this service does not recognize.
  #[instrument(name = "session_service::resolve", skip(self, session_id), fields(session_id = %session_id))]
  pub async fn resolve(&self, session_id: Uuid) -> Result<Session> {
    self.store.get_session(session_id).await.map_err(|err| match err {
      AppError::NotFound(_) => {
        AppError::Unauthenticated("Session is not recognized or has been revoked.".to_string())
      }
      other => other,
    })
  }

  /// Records a session identifier handed to us by the auth collaborator
  /// (used by demo seeding; production sessions arrive out of band).
  #[instrument(name = "session_service::register", skip(self, session_id), fields(session_id = %session_id))]
  pub async fn register(&self, session_id: Uuid) -> Result<Session> {
    self.store.insert_session(session_id).await
  }
}
