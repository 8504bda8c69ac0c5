// vibe_shop/server/src/models/cart_item.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One ledger row. At most one line exists per product.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub id: i64,
  pub product_id: i64,
  pub qty: i64,
  pub created_at: DateTime<Utc>,
}

/// A cart line joined with its product, as shown by the cart listing.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
  pub cart_id: i64,
  pub product_id: i64,
  pub name: String,
  pub price: f64,
  pub qty: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
  pub items: Vec<CartEntry>,
  pub total: f64,
}

/// Outcome of an add-to-cart call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCartLine {
  pub cart_id: i64,
  pub product_id: i64,
  pub qty: i64,
  #[serde(skip)]
  pub created: bool, // false when merged into an existing line
}
