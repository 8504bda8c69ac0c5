// vibe_shop/server/src/store/mod.rs

//! Persistence boundary for the catalog and the cart ledger.
//!
//! Services only ever talk to [`ShopStore`]; `SqlStore` backs the running
//! server and `MemoryStore` stands in for it in tests. Every method maps to a
//! single statement so callers get per-call atomicity and nothing more.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{CartEntry, CartLine, Product};

pub mod memory;
pub mod sql;

pub use memory::MemoryStore;
pub use sql::SqlStore;

#[async_trait]
pub trait ShopStore: Send + Sync {
  /// All products ordered by id.
  async fn list_products(&self) -> Result<Vec<Product>>;

  async fn find_product(&self, product_id: i64) -> Result<Option<Product>>;

  /// Products whose id is in `product_ids`. Unknown ids are simply absent
  /// from the result.
  async fn find_products(&self, product_ids: &[i64]) -> Result<Vec<Product>>;

  /// Ledger rows joined with the catalog, in line id order. Lines pointing at
  /// a missing product are skipped.
  async fn list_cart_entries(&self) -> Result<Vec<CartEntry>>;

  async fn find_line_by_product(&self, product_id: i64) -> Result<Option<CartLine>>;

  async fn insert_line(&self, product_id: i64, qty: i64) -> Result<CartLine>;

  /// Overwrites the quantity of a line. Returns `false` if no line matched.
  async fn set_line_qty(&self, line_id: i64, qty: i64) -> Result<bool>;

  /// Returns `false` if no line matched.
  async fn delete_line(&self, line_id: i64) -> Result<bool>;

  /// Empties the ledger, returning the number of removed lines.
  async fn clear_cart(&self) -> Result<u64>;
}
