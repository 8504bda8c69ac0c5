// vibe_shop/server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{instrument, warn};

use crate::errors::AppError;
use crate::services::checkout_service::{self, CheckoutItem};
use crate::state::AppState;

/// Optional body: `{ "cartItems": [{ "productId": 1, "qty": 2 }] }`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestPayload {
  #[serde(default)]
  pub cart_items: Option<Vec<CheckoutItem>>,
}

impl CheckoutRequestPayload {
  /// An empty body means "check out the stored cart".
  fn from_body(body: &[u8]) -> Result<Self, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(Self::default());
    }
    serde_json::from_slice(body).map_err(|e| {
      warn!("Malformed checkout payload: {}", e);
      AppError::Validation(format!("Invalid payload: {}", e))
    })
  }
}

#[instrument(name = "handler::checkout", skip(app_state, body))]
pub async fn checkout_handler(app_state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, AppError> {
  let payload = CheckoutRequestPayload::from_body(&body)?;
  let receipt = checkout_service::checkout(app_state.store.as_ref(), payload.cart_items).await?;
  Ok(HttpResponse::Ok().json(json!({ "receipt": receipt })))
}
