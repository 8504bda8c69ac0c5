// vibe_shop/server/src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::ShopStore;
use crate::db::SEED_PRODUCTS;
use crate::errors::{AppError, Result};
use crate::models::{CartEntry, CartLine, Product};

#[derive(Debug, Default)]
struct Tables {
  products: Vec<Product>,
  lines: Vec<CartLine>,
  last_line_id: i64,
}

/// In-process [`ShopStore`] for tests. Each call holds the lock for its whole
/// body, mirroring single-statement atomicity.
#[derive(Debug, Default)]
pub struct MemoryStore {
  tables: Mutex<Tables>,
  fail_clear: bool,
}

impl MemoryStore {
  pub fn with_products(products: Vec<Product>) -> Self {
    Self {
      tables: Mutex::new(Tables {
        products,
        ..Tables::default()
      }),
      fail_clear: false,
    }
  }

  /// Catalog preloaded with the demo products, ids starting at 1.
  pub fn seeded() -> Self {
    let products = SEED_PRODUCTS
      .iter()
      .zip(1..)
      .map(|((name, price, description), id)| Product {
        id,
        name: (*name).to_string(),
        price: *price,
        description: (*description).to_string(),
      })
      .collect();
    Self::with_products(products)
  }

  /// Makes every `clear_cart` call fail.
  pub fn failing_clear(mut self) -> Self {
    self.fail_clear = true;
    self
  }

  pub fn line_count(&self) -> usize {
    self.tables.lock().lines.len()
  }
}

#[async_trait]
impl ShopStore for MemoryStore {
  async fn list_products(&self) -> Result<Vec<Product>> {
    let mut products = self.tables.lock().products.clone();
    products.sort_by_key(|p| p.id);
    Ok(products)
  }

  async fn find_product(&self, product_id: i64) -> Result<Option<Product>> {
    Ok(self.tables.lock().products.iter().find(|p| p.id == product_id).cloned())
  }

  async fn find_products(&self, product_ids: &[i64]) -> Result<Vec<Product>> {
    let tables = self.tables.lock();
    Ok(
      tables
        .products
        .iter()
        .filter(|p| product_ids.contains(&p.id))
        .cloned()
        .collect(),
    )
  }

  async fn list_cart_entries(&self) -> Result<Vec<CartEntry>> {
    let tables = self.tables.lock();
    let entries = tables
      .lines
      .iter()
      .filter_map(|line| {
        let product = tables.products.iter().find(|p| p.id == line.product_id)?;
        Some(CartEntry {
          cart_id: line.id,
          product_id: product.id,
          name: product.name.clone(),
          price: product.price,
          qty: line.qty,
        })
      })
      .collect();
    Ok(entries)
  }

  async fn find_line_by_product(&self, product_id: i64) -> Result<Option<CartLine>> {
    Ok(self.tables.lock().lines.iter().find(|l| l.product_id == product_id).cloned())
  }

  async fn insert_line(&self, product_id: i64, qty: i64) -> Result<CartLine> {
    let mut tables = self.tables.lock();
    tables.last_line_id += 1;
    let line = CartLine {
      id: tables.last_line_id,
      product_id,
      qty,
      created_at: Utc::now(),
    };
    tables.lines.push(line.clone());
    Ok(line)
  }

  async fn set_line_qty(&self, line_id: i64, qty: i64) -> Result<bool> {
    let mut tables = self.tables.lock();
    match tables.lines.iter_mut().find(|l| l.id == line_id) {
      Some(line) => {
        line.qty = qty;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn delete_line(&self, line_id: i64) -> Result<bool> {
    let mut tables = self.tables.lock();
    let before = tables.lines.len();
    tables.lines.retain(|l| l.id != line_id);
    Ok(tables.lines.len() < before)
  }

  async fn clear_cart(&self) -> Result<u64> {
    if self.fail_clear {
      return Err(AppError::Store("cart table is locked".to_string()));
    }
    let mut tables = self.tables.lock();
    let removed = tables.lines.len() as u64;
    tables.lines.clear();
    Ok(removed)
  }
}
