// vibe_shop/server/src/services/checkout_service.rs

use std::collections::HashMap;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::Result as AppResult;
use crate::models::{Product, Receipt, ReceiptLine};
use crate::services::pricing::{line_amount, round_cents};
use crate::store::ShopStore;

/// Name used for receipt lines whose product is not in the catalog.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown";

/// A cart line as sent by the client at checkout time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
  pub product_id: i64,
  pub qty: i64,
}

/// Prices the given items (or the stored cart when none are given), builds a
/// receipt and then empties the cart.
///
/// Emptying the cart is best effort: a failure is logged and the receipt is
/// still returned.
#[instrument(skip(store, client_items), fields(client_items = client_items.as_ref().map(Vec::len)))]
pub async fn checkout(store: &dyn ShopStore, client_items: Option<Vec<CheckoutItem>>) -> AppResult<Receipt> {
  let priced = match client_items.filter(|items| !items.is_empty()) {
    Some(items) => price_client_items(store, &items).await?,
    None => price_stored_cart(store).await?,
  };

  let total = priced.iter().map(|(_, raw)| raw).sum::<f64>();
  let receipt = Receipt {
    items: priced.into_iter().map(|(line, _)| line).collect(),
    total: round_cents(total),
    timestamp: Utc::now(),
  };
  info!(lines = receipt.items.len(), total = receipt.total, "Receipt computed.");

  match store.clear_cart().await {
    Ok(removed) => info!(removed, "Cart cleared after checkout."),
    Err(e) => warn!(error = %e, "Failed to clear cart after checkout; returning receipt anyway."),
  }

  Ok(receipt)
}

/// Receipt lines paired with their unrounded subtotal.
type PricedLines = Vec<(ReceiptLine, f64)>;

fn priced_line(product_id: i64, name: String, price: f64, qty: i64) -> (ReceiptLine, f64) {
  let raw = line_amount(price, qty);
  let line = ReceiptLine {
    product_id,
    name,
    qty,
    price,
    subtotal: round_cents(raw),
  };
  (line, raw)
}

async fn price_client_items(store: &dyn ShopStore, items: &[CheckoutItem]) -> AppResult<PricedLines> {
  let mut ids: Vec<i64> = items.iter().map(|i| i.product_id).collect();
  ids.sort_unstable();
  ids.dedup();

  let catalog: HashMap<i64, Product> = store.find_products(&ids).await?.into_iter().map(|p| (p.id, p)).collect();

  Ok(
    items
      .iter()
      .map(|item| match catalog.get(&item.product_id) {
        Some(product) => priced_line(item.product_id, product.name.clone(), product.price, item.qty),
        None => {
          warn!(product_id = item.product_id, "Checkout item not in catalog, pricing at zero.");
          priced_line(item.product_id, UNKNOWN_PRODUCT_NAME.to_string(), 0.0, item.qty)
        }
      })
      .collect(),
  )
}

async fn price_stored_cart(store: &dyn ShopStore) -> AppResult<PricedLines> {
  let entries = store.list_cart_entries().await?;
  Ok(
    entries
      .into_iter()
      .map(|e| priced_line(e.product_id, e.name, e.price, e.qty))
      .collect(),
  )
}
