// vibe_shop/server/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;

use vibe_shop::store::SqlStore;
use vibe_shop::{db, telemetry, web, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  telemetry::init_tracing();
  tracing::info!("Starting Vibe Shop backend...");

  let app_config = AppConfig::from_env().context("loading configuration")?;

  let pool = db::connect(&app_config).await.context("connecting to the database")?;
  db::init_schema(&pool).await.context("creating tables")?;
  if app_config.seed_db {
    db::seed_products(&pool).await.context("seeding products")?;
  }

  let sql_store = Arc::new(SqlStore::new(pool));
  let app_state = AppState::new(sql_store.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Backend listening on http://{}", server_address);

  let served = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("binding {}", server_address))?
  .run()
  .await;

  sql_store.close().await;
  tracing::info!("Server stopped.");
  served.context("running HTTP server")
}
