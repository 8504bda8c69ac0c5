// vibe_shop/server/src/db.rs

//! Connection setup, schema bootstrap and catalog seeding.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::Result;

/// Demo catalog inserted on first start: (name, price, description).
pub const SEED_PRODUCTS: &[(&str, f64, &str)] = &[
  ("Vibe T-Shirt", 19.99, "Soft cotton t-shirt"),
  ("Vibe Cap", 12.5, "Adjustable cap"),
  ("Vibe Mug", 8.99, "Ceramic mug 350ml"),
  ("Vibe Hoodie", 39.99, "Comfort hoodie"),
  ("Vibe Sticker Pack", 4.5, "5 assorted stickers"),
  ("Vibe Tote Bag", 14.0, "Reusable tote"),
  ("Vibe Poster", 9.99, "A2 poster"),
  ("Vibe Phone Case", 15.0, "Fits most phones"),
];

const CREATE_PRODUCTS: &str = r#"
  CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL DEFAULT 0,
    description TEXT NOT NULL DEFAULT ''
  )
"#;

const CREATE_CART: &str = r#"
  CREATE TABLE IF NOT EXISTS cart (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id INTEGER NOT NULL,
    qty INTEGER NOT NULL,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY(product_id) REFERENCES products(id)
  )
"#;

const CREATE_USERS: &str = r#"
  CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT
  )
"#;

pub async fn connect(config: &AppConfig) -> Result<SqlitePool> {
  let pool = SqlitePoolOptions::new()
    .max_connections(config.db_max_connections)
    .connect(&config.database_url)
    .await?;
  info!(max_connections = config.db_max_connections, "Connected to the database.");
  Ok(pool)
}

/// Creates any missing tables. Existing data is left alone.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
  for ddl in [CREATE_PRODUCTS, CREATE_CART, CREATE_USERS] {
    sqlx::query(ddl).execute(pool).await?;
  }
  info!("Database schema ready.");
  Ok(())
}

/// Drops every table and recreates the schema from scratch.
#[instrument(skip(pool))]
pub async fn reset_schema(pool: &SqlitePool) -> Result<()> {
  // cart references products, so it goes first
  for table in ["cart", "users", "products"] {
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", table)).execute(pool).await?;
  }
  info!("Dropped existing tables.");
  init_schema(pool).await
}

/// Inserts [`SEED_PRODUCTS`] when the catalog is empty. Returns the number of
/// products inserted.
#[instrument(skip(pool))]
pub async fn seed_products(pool: &SqlitePool) -> Result<u64> {
  let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(pool).await?;
  if existing > 0 {
    info!(existing, "Catalog already populated, skipping seed.");
    return Ok(0);
  }

  let mut tx = pool.begin().await?;
  for (name, price, description) in SEED_PRODUCTS {
    sqlx::query("INSERT INTO products (name, price, description) VALUES (?, ?, ?)")
      .bind(*name)
      .bind(*price)
      .bind(*description)
      .execute(&mut *tx)
      .await?;
  }
  tx.commit().await?;

  info!(count = SEED_PRODUCTS.len(), "Seeded product catalog.");
  Ok(SEED_PRODUCTS.len() as u64)
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
  // A single connection keeps every query on the same in-memory database.
  SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .unwrap()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn seeding_is_skipped_once_catalog_has_rows() {
    let pool = memory_pool().await;
    init_schema(&pool).await.unwrap();

    assert_eq!(seed_products(&pool).await.unwrap(), SEED_PRODUCTS.len() as u64);
    assert_eq!(seed_products(&pool).await.unwrap(), 0);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(&pool).await.unwrap();
    assert_eq!(count, SEED_PRODUCTS.len() as i64);
  }

  #[tokio::test]
  async fn cart_table_uses_snake_case_columns() {
    let pool = memory_pool().await;
    init_schema(&pool).await.unwrap();

    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('cart') ORDER BY cid")
      .fetch_all(&pool)
      .await
      .unwrap();
    assert_eq!(columns, vec!["id", "product_id", "qty", "created_at"]);
  }

  #[tokio::test]
  async fn init_schema_is_idempotent_and_reset_clears_data() {
    let pool = memory_pool().await;
    init_schema(&pool).await.unwrap();
    seed_products(&pool).await.unwrap();
    init_schema(&pool).await.unwrap();

    sqlx::query("INSERT INTO cart (product_id, qty) VALUES (1, 2)").execute(&pool).await.unwrap();
    reset_schema(&pool).await.unwrap();

    let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(&pool).await.unwrap();
    let lines: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart").fetch_one(&pool).await.unwrap();
    assert_eq!((products, lines), (0, 0));
  }
}
