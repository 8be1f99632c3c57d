// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentSession;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub product_id: Uuid,
  #[serde(default = "default_quantity")]
  pub quantity: i32,
}

fn default_quantity() -> i32 {
  1
}

#[instrument(
    name = "handler::get_cart",
    skip(app_state, session),
    fields(session_id = %session.session_id)
)]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart.get_cart(session.session_id).await?;
  info!("Fetched cart with {} items.", cart.items.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart fetched successfully.",
      "cart": cart
  })))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, session),
    fields(session_id = %session.session_id, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  let item = app_state
    .cart
    .add_to_cart(session.session_id, req_payload.product_id, req_payload.quantity)
    .await?;

  info!(
    cart_item_id = %item.id,
    new_quantity = item.quantity,
    "Item added to cart."
  );

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item added to cart successfully.",
      "cartItem": item
  })))
}

// Removal is keyed on the cart row id alone and is idempotent; a repeated
// delete of the same row still reports success.
#[instrument(name = "handler::remove_cart_item", skip(app_state, path), fields(cart_item_id = %path.as_ref()))]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  app_state.cart.remove_from_cart(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item removed from cart."
  })))
}

#[instrument(
    name = "handler::clear_cart",
    skip(app_state, session),
    fields(session_id = %session.session_id)
)]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  let removed = app_state.cart.clear_cart(session.session_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart cleared.",
      "removed": removed
  })))
}
