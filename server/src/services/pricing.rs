// vibe_shop/server/src/services/pricing.rs

/// Rounds a monetary amount to two decimal places, halves away from zero.
pub fn round_cents(amount: f64) -> f64 {
  (amount * 100.0).round() / 100.0
}

/// Unrounded price × quantity.
pub fn line_amount(price: f64, qty: i64) -> f64 {
  price * qty as f64
}
