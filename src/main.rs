// src/main.rs

use glow_grace::config::{AppConfig, StoreBackend};
use glow_grace::seed;
use glow_grace::state::AppState;
use glow_grace::store::{EntityStore, MemoryStore, PgStore};
use glow_grace::web;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting Glow & Grace storefront server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize the entity store backend
  let store: Arc<dyn EntityStore> = match app_config.store_backend {
    StoreBackend::Memory => {
      tracing::info!("Using in-memory entity store.");
      Arc::new(MemoryStore::new())
    }
    StoreBackend::Postgres => {
      // Presence of DATABASE_URL was already checked during config loading.
      let database_url = app_config.database_url.as_deref().unwrap_or_default();
      match PgPool::connect(database_url).await {
        Ok(pool) => {
          tracing::info!("Successfully connected to the database.");
          Arc::new(PgStore::new(pool))
        }
        Err(e) => {
          tracing::error!(error = %e, "Failed to connect to the database.");
          panic!("Database connection error: {}", e);
        }
      }
    }
  };

  // Seed demo data if configured
  if app_config.seed_demo_data {
    if let Err(e) = seed::seed_demo_data(&store).await {
      tracing::error!(error = %e, "Failed to seed demo data.");
    }
  }

  // Create AppState wiring the services over the chosen store
  let app_state = AppState::new(store);

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
