// vibe_shop/server/src/store/sql.rs

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{error, info};

use super::ShopStore;
use crate::errors::{AppError, Result};
use crate::models::{CartEntry, CartLine, Product};

/// [`ShopStore`] backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqlStore {
  pool: SqlitePool,
}

impl SqlStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Closes the pool, waiting for in-flight connections to be returned.
  pub async fn close(&self) {
    self.pool.close().await;
    info!("Database pool closed.");
  }
}

fn log_db_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
  move |e| {
    error!(operation, "Database error: {}", e);
    AppError::Sqlx(e)
  }
}

#[async_trait]
impl ShopStore for SqlStore {
  async fn list_products(&self) -> Result<Vec<Product>> {
    sqlx::query_as("SELECT id, name, price, description FROM products ORDER BY id ASC")
      .fetch_all(&self.pool)
      .await
      .map_err(log_db_error("list_products"))
  }

  async fn find_product(&self, product_id: i64) -> Result<Option<Product>> {
    sqlx::query_as("SELECT id, name, price, description FROM products WHERE id = ?")
      .bind(product_id)
      .fetch_optional(&self.pool)
      .await
      .map_err(log_db_error("find_product"))
  }

  async fn find_products(&self, product_ids: &[i64]) -> Result<Vec<Product>> {
    if product_ids.is_empty() {
      return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new("SELECT id, name, price, description FROM products WHERE id IN (");
    let mut ids = query.separated(", ");
    for id in product_ids {
      ids.push_bind(*id);
    }
    ids.push_unseparated(")");

    query
      .build_query_as::<Product>()
      .fetch_all(&self.pool)
      .await
      .map_err(log_db_error("find_products"))
  }

  async fn list_cart_entries(&self) -> Result<Vec<CartEntry>> {
    sqlx::query_as(
      r#"
      SELECT cart.id AS cart_id, cart.qty, products.id AS product_id, products.name, products.price
      FROM cart
      JOIN products ON cart.product_id = products.id
      ORDER BY cart.id ASC
      "#,
    )
    .fetch_all(&self.pool)
    .await
    .map_err(log_db_error("list_cart_entries"))
  }

  async fn find_line_by_product(&self, product_id: i64) -> Result<Option<CartLine>> {
    sqlx::query_as("SELECT id, product_id, qty, created_at FROM cart WHERE product_id = ? ORDER BY id ASC LIMIT 1")
      .bind(product_id)
      .fetch_optional(&self.pool)
      .await
      .map_err(log_db_error("find_line_by_product"))
  }

  async fn insert_line(&self, product_id: i64, qty: i64) -> Result<CartLine> {
    sqlx::query_as("INSERT INTO cart (product_id, qty) VALUES (?, ?) RETURNING id, product_id, qty, created_at")
      .bind(product_id)
      .bind(qty)
      .fetch_one(&self.pool)
      .await
      .map_err(log_db_error("insert_line"))
  }

  async fn set_line_qty(&self, line_id: i64, qty: i64) -> Result<bool> {
    let result = sqlx::query("UPDATE cart SET qty = ? WHERE id = ?")
      .bind(qty)
      .bind(line_id)
      .execute(&self.pool)
      .await
      .map_err(log_db_error("set_line_qty"))?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete_line(&self, line_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM cart WHERE id = ?")
      .bind(line_id)
      .execute(&self.pool)
      .await
      .map_err(log_db_error("delete_line"))?;
    Ok(result.rows_affected() > 0)
  }

  async fn clear_cart(&self) -> Result<u64> {
    let result = sqlx::query("DELETE FROM cart")
      .execute(&self.pool)
      .await
      .map_err(log_db_error("clear_cart"))?;
    Ok(result.rows_affected())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::{init_schema, memory_pool, seed_products};

  async fn seeded_store() -> SqlStore {
    let pool = memory_pool().await;
    init_schema(&pool).await.unwrap();
    seed_products(&pool).await.unwrap();
    SqlStore::new(pool)
  }

  #[tokio::test]
  async fn lists_seeded_products_in_id_order() {
    let store = seeded_store().await;
    let products = store.list_products().await.unwrap();
    assert_eq!(products.len(), 8);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "Vibe T-Shirt");
    assert_eq!(products[0].price, 19.99);
    assert!(products.windows(2).all(|w| w[0].id < w[1].id));
  }

  #[tokio::test]
  async fn batch_lookup_skips_unknown_ids() {
    let store = seeded_store().await;
    let mut found = store.find_products(&[2, 999, 4]).await.unwrap();
    found.sort_by_key(|p| p.id);
    let ids: Vec<i64> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4]);
    assert!(store.find_products(&[]).await.unwrap().is_empty());
    assert!(store.find_product(999).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn line_lifecycle_round_trips_through_sqlite() {
    let store = seeded_store().await;

    let line = store.insert_line(3, 2).await.unwrap();
    assert_eq!((line.product_id, line.qty), (3, 2));

    let found = store.find_line_by_product(3).await.unwrap().unwrap();
    assert_eq!(found.id, line.id);
    assert_eq!(found.created_at, line.created_at);

    assert!(store.set_line_qty(line.id, 7).await.unwrap());
    assert!(!store.set_line_qty(line.id + 100, 7).await.unwrap());

    let entries = store.list_cart_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].cart_id, line.id);
    assert_eq!(entries[0].qty, 7);
    assert_eq!(entries[0].name, "Vibe Mug");

    assert!(store.delete_line(line.id).await.unwrap());
    assert!(!store.delete_line(line.id).await.unwrap());
  }

  #[tokio::test]
  async fn clear_cart_reports_removed_rows() {
    let store = seeded_store().await;
    store.insert_line(1, 1).await.unwrap();
    store.insert_line(2, 1).await.unwrap();
    assert_eq!(store.clear_cart().await.unwrap(), 2);
    assert!(store.list_cart_entries().await.unwrap().is_empty());
  }
}
