// vibe_shop/server/src/services/cart_service.rs

use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{AddedCartLine, CartView};
use crate::services::pricing::{line_amount, round_cents};
use crate::store::ShopStore;

/// Current cart contents with the rounded grand total.
#[instrument(skip(store))]
pub async fn list_cart(store: &dyn ShopStore) -> AppResult<CartView> {
  let items = store.list_cart_entries().await?;
  let total = items.iter().map(|e| line_amount(e.price, e.qty)).sum::<f64>();
  Ok(CartView {
    items,
    total: round_cents(total),
  })
}

/// Adds `qty` of a product. An existing line for the same product has the
/// quantity added to it and keeps its id and creation time.
#[instrument(skip(store))]
pub async fn add_to_cart(store: &dyn ShopStore, product_id: Option<i64>, qty: Option<i64>) -> AppResult<AddedCartLine> {
  let (product_id, qty) = match (product_id, qty) {
    (Some(p), Some(q)) if p > 0 && q > 0 => (p, q),
    _ => {
      warn!("Rejected add to cart with missing or non-positive fields.");
      return Err(AppError::Validation("Invalid payload".to_string()));
    }
  };

  if store.find_product(product_id).await?.is_none() {
    warn!(product_id, "Rejected add to cart for unknown product.");
    return Err(AppError::Validation(format!("Unknown product {}", product_id)));
  }

  // Read-then-write without a transaction: two racing adds for one product may lose an update.
  match store.find_line_by_product(product_id).await? {
    Some(line) => {
      let new_qty = line.qty.checked_add(qty).ok_or_else(|| {
        warn!(cart_id = line.id, product_id, "Rejected add that would overflow the line quantity.");
        AppError::Validation("Invalid qty".to_string())
      })?;
      if !store.set_line_qty(line.id, new_qty).await? {
        // Line vanished between the read and the write.
        return Err(AppError::NotFound("Not found".to_string()));
      }
      info!(cart_id = line.id, product_id, qty = new_qty, "Merged into existing cart line.");
      Ok(AddedCartLine {
        cart_id: line.id,
        product_id,
        qty: new_qty,
        created: false,
      })
    }
    None => {
      let line = store.insert_line(product_id, qty).await?;
      info!(cart_id = line.id, product_id, qty, "Created cart line.");
      Ok(AddedCartLine {
        cart_id: line.id,
        product_id,
        qty: line.qty,
        created: true,
      })
    }
  }
}

/// Sets a line's quantity to exactly `qty`.
#[instrument(skip(store))]
pub async fn update_cart_line(store: &dyn ShopStore, line_id: i64, qty: Option<i64>) -> AppResult<i64> {
  let qty = match qty {
    Some(q) if q > 0 => q,
    _ => return Err(AppError::Validation("Invalid qty".to_string())),
  };
  if !store.set_line_qty(line_id, qty).await? {
    return Err(AppError::NotFound("Not found".to_string()));
  }
  info!(line_id, qty, "Cart line quantity replaced.");
  Ok(qty)
}

#[instrument(skip(store))]
pub async fn remove_cart_line(store: &dyn ShopStore, line_id: i64) -> AppResult<()> {
  if !store.delete_line(line_id).await? {
    return Err(AppError::NotFound("Not found".to_string()));
  }
  info!(line_id, "Cart line removed.");
  Ok(())
}
