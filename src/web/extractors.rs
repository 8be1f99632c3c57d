// src/web/extractors.rs

use actix_web::{FromRequest, HttpRequest};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;

/// The session identifier presented with a request, read from the
/// `X-Session-Id` header. The auth collaborator issues these out of band;
/// a missing or malformed header is the "no current session" case and maps
/// to `Unauthenticated` before any handler runs.
///
/// Whether the identifier actually resolves to a live session is checked
/// against the store by `SessionService`, not here.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession {
  pub session_id: Uuid,
}

impl FromRequest for CurrentSession {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    if let Some(header) = req.headers().get("X-Session-Id") {
      if let Ok(raw) = header.to_str() {
        if let Ok(session_id) = Uuid::parse_str(raw) {
          return futures_util::future::ready(Ok(CurrentSession { session_id }));
        }
      }
    }
    warn!("CurrentSession extractor: missing or invalid X-Session-Id header.");
    futures_util::future::ready(Err(AppError::Unauthenticated(
      "Sign in required. Missing or invalid X-Session-Id header.".to_string(),
    )))
  }
}
