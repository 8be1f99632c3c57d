// src/models/session.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// An authenticated session, issued by the external auth collaborator.
/// This service only records and resolves the identifier; it never issues
/// or refreshes sessions.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Session {
  pub id: Uuid,
  pub created_at: DateTime<Utc>,
}
