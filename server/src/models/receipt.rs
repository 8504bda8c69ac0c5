// vibe_shop/server/src/models/receipt.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
  pub product_id: i64,
  pub name: String,
  pub qty: i64,
  pub price: f64,
  pub subtotal: f64,
}

/// Checkout summary. Computed per call and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
  pub items: Vec<ReceiptLine>,
  pub total: f64,
  pub timestamp: DateTime<Utc>,
}
