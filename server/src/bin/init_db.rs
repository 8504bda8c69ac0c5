// vibe_shop/server/src/bin/init_db.rs

//! Drops and recreates every table, then seeds the demo catalog.

use anyhow::Context;

use vibe_shop::{db, telemetry, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  telemetry::init_tracing();

  let app_config = AppConfig::from_env().context("loading configuration")?;
  let pool = db::connect(&app_config).await.context("connecting to the database")?;

  db::reset_schema(&pool).await.context("resetting schema")?;
  let seeded = db::seed_products(&pool).await.context("seeding products")?;
  pool.close().await;

  tracing::info!(seeded, database_url = %app_config.database_url, "Database initialized with products.");
  Ok(())
}
