// src/web/handlers/session_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentSession;

/// Echoes the resolved session, or 401 when the presented identifier is
/// missing or unknown. The storefront uses this to decide whether to show
/// the signed-in chrome.
#[instrument(
    name = "handler::current_session",
    skip(app_state, session),
    fields(session_id = %session.session_id)
)]
pub async fn current_session_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  let resolved = app_state.sessions.resolve(session.session_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Session is active.",
      "session": resolved
  })))
}
