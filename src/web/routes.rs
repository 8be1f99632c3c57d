// src/web/routes.rs

use actix_web::web;

// Simple liveness probe. Store connectivity is exercised lazily by the
// first real request rather than here.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by the integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Session Routes (issuance happens in the external auth service;
      // this only resolves the presented identifier)
      .service(web::scope("/auth").route(
        "/session",
        web::get().to(crate::web::handlers::session_handlers::current_session_handler),
      ))
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("", web::get().to(crate::web::handlers::cart_handlers::get_cart_handler))
          .route("", web::delete().to(crate::web::handlers::cart_handlers::clear_cart_handler))
          .route(
            "/items",
            web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
          )
          .route(
            "/items/{cart_item_id}",
            web::delete().to(crate::web::handlers::cart_handlers::remove_cart_item_handler),
          ),
      )
      // Storefront catalog routes
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          ),
      )
      // Admin catalog mutation routes
      .service(
        web::scope("/admin/products")
          .route(
            "",
            web::post().to(crate::web::handlers::product_handlers::create_product_handler),
          )
          .route(
            "/{product_id}",
            web::put().to(crate::web::handlers::product_handlers::update_product_handler),
          )
          .route(
            "/{product_id}",
            web::delete().to(crate::web::handlers::product_handlers::delete_product_handler),
          ),
      ),
  );
}
