// vibe_shop/server/src/models/product.rs

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub description: String,
}
