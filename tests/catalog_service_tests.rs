// tests/catalog_service_tests.rs
mod common;

use common::*;
use glow_grace::errors::AppError;
use glow_grace::services::catalog::{CatalogService, CreateProduct, UpdateProduct};
use glow_grace::store::ProductOrder;
use uuid::Uuid;

#[tokio::test]
async fn create_product_rejects_empty_name() {
  let catalog = CatalogService::new(memory_store());

  let err = catalog
    .create_product(CreateProduct {
      name: String::new(),
      price: 10.0,
      stock_quantity: 1,
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  // Whitespace-only names are empty after trimming.
  let err = catalog
    .create_product(CreateProduct {
      name: "   ".to_string(),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn create_product_rejects_negative_price_and_stock() {
  let catalog = CatalogService::new(memory_store());

  let err = catalog
    .create_product(CreateProduct {
      name: "Radiance Face Serum".to_string(),
      price: -1.0,
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  let err = catalog
    .create_product(CreateProduct {
      name: "Radiance Face Serum".to_string(),
      stock_quantity: -4,
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn create_product_converts_dollars_to_cents() {
  let catalog = CatalogService::new(memory_store());

  let product = catalog
    .create_product(CreateProduct {
      name: "Velvet Matte Lipstick".to_string(),
      price: 24.99,
      stock_quantity: 30,
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(product.price_cents, 2499);
  assert_eq!(product.stock_quantity, 30);

  // Empty image URLs are accepted as-is.
  assert_eq!(product.image_url, "");
}

#[tokio::test]
async fn list_products_orders_newest_first_by_default() {
  let store = memory_store();
  let catalog = CatalogService::new(store.clone());
  // Spaced out so creation timestamps are strictly ordered.
  insert_product(&store, "Botanical Cleansing Oil", 1895, 5).await;
  tokio::time::sleep(std::time::Duration::from_millis(2)).await;
  insert_product(&store, "Radiance Face Serum", 4999, 10).await;
  tokio::time::sleep(std::time::Duration::from_millis(2)).await;
  insert_product(&store, "Hydra Silk Moisturizer", 3250, 8).await;

  let newest_first = catalog.list_products(ProductOrder::CreatedDesc).await.unwrap();
  let names: Vec<&str> = newest_first.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(
    names,
    ["Hydra Silk Moisturizer", "Radiance Face Serum", "Botanical Cleansing Oil"]
  );

  let by_name = catalog.list_products(ProductOrder::NameAsc).await.unwrap();
  let names: Vec<&str> = by_name.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(
    names,
    ["Botanical Cleansing Oil", "Hydra Silk Moisturizer", "Radiance Face Serum"]
  );
}

#[tokio::test]
async fn update_product_applies_partial_changes() {
  let store = memory_store();
  let catalog = CatalogService::new(store.clone());
  let product = insert_product(&store, "Radiance Face Serum", 4999, 10).await;

  let updated = catalog
    .update_product(
      product.id,
      UpdateProduct {
        price: Some(54.5),
        stock_quantity: Some(7),
        ..Default::default()
      },
    )
    .await
    .unwrap();

  assert_eq!(updated.price_cents, 5450);
  assert_eq!(updated.stock_quantity, 7);
  // Untouched fields keep their values.
  assert_eq!(updated.name, "Radiance Face Serum");
  assert_eq!(updated.created_at, product.created_at);
  assert!(updated.updated_at >= product.updated_at);
}

#[tokio::test]
async fn update_product_validates_fields_and_id() {
  let store = memory_store();
  let catalog = CatalogService::new(store.clone());
  let product = insert_product(&store, "Radiance Face Serum", 4999, 10).await;

  let err = catalog
    .update_product(
      product.id,
      UpdateProduct {
        name: Some("  ".to_string()),
        ..Default::default()
      },
    )
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  let err = catalog
    .update_product(Uuid::new_v4(), UpdateProduct::default())
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_product_requires_existing_id() {
  let store = memory_store();
  let catalog = CatalogService::new(store.clone());
  let product = insert_product(&store, "Radiance Face Serum", 4999, 10).await;

  catalog.delete_product(product.id).await.unwrap();
  let err = catalog.delete_product(product.id).await.unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_product_does_not_cascade_into_carts() {
  let store = memory_store();
  let catalog = CatalogService::new(store.clone());
  let session = new_session(&store).await;
  let product = insert_product(&store, "Radiance Face Serum", 4999, 10).await;

  store.upsert_cart_item(session.id, product.id, 1).await.unwrap();
  catalog.delete_product(product.id).await.unwrap();

  // The orphaned row is still in the store; only cart views skip it.
  let rows = store.list_cart_items(session.id).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].product_id, product.id);
}
