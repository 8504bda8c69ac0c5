// vibe_shop/server/tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use sqlx::sqlite::SqlitePoolOptions;

use vibe_shop::store::{MemoryStore, ShopStore, SqlStore};
use vibe_shop::{db, web as routes, AppState};

pub fn test_app(
  store: Arc<dyn ShopStore>,
) -> App<impl ServiceFactory<ServiceRequest, Config = (), Response = ServiceResponse, Error = actix_web::Error, InitError = ()>>
{
  App::new()
    .app_data(web::Data::new(AppState::new(store)))
    .configure(routes::configure_app_routes)
}

pub fn memory_store() -> Arc<MemoryStore> {
  Arc::new(MemoryStore::seeded())
}

/// Seeded SQLite store living entirely in memory.
pub async fn sqlite_store() -> Arc<SqlStore> {
  // One connection, otherwise each pooled connection sees its own empty database.
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .unwrap();
  db::init_schema(&pool).await.unwrap();
  db::seed_products(&pool).await.unwrap();
  Arc::new(SqlStore::new(pool))
}
