// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::catalog::{CreateProduct, UpdateProduct};
use crate::state::AppState;
use crate::store::ProductOrder;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub order: Option<String>,
}

impl ListProductsQuery {
  // Unknown values fall back to the default newest-first ordering.
  fn product_order(&self) -> ProductOrder {
    match self.order.as_deref() {
      Some("name") => ProductOrder::NameAsc,
      _ => ProductOrder::CreatedDesc,
    }
  }
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list_products(query_params.product_order()).await?;
  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.get_product(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product fetched successfully.",
      "product": product
  })))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.create_product(payload.into_inner()).await?;
  info!(product_id = %product.id, "Product created via admin API.");

  Ok(HttpResponse::Created().json(json!({
      "message": "Product created successfully.",
      "product": product
  })))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<UpdateProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state
    .catalog
    .update_product(path.into_inner(), payload.into_inner())
    .await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product updated successfully.",
      "product": product
  })))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.catalog.delete_product(product_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product deleted successfully.",
      "product_id": product_id
  })))
}
