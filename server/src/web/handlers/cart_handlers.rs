// vibe_shop/server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::cart_service;
use crate::state::AppState;

// --- Request DTOs ---
// Fields are optional so that a missing value surfaces as a validation error
// from the service rather than a body parse failure.

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: Option<i64>,
  pub qty: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartLineRequestPayload {
  pub qty: Option<i64>,
}

// --- Handlers ---

#[instrument(name = "handler::list_cart", skip(app_state))]
pub async fn list_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let view = cart_service::list_cart(app_state.store.as_ref()).await?;
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(name = "handler::add_to_cart", skip(app_state, req_payload))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let AddToCartRequestPayload { product_id, qty } = req_payload.into_inner();
  let added = cart_service::add_to_cart(app_state.store.as_ref(), product_id, qty).await?;

  if added.created {
    Ok(HttpResponse::Created().json(added))
  } else {
    Ok(HttpResponse::Ok().json(added))
  }
}

#[instrument(name = "handler::update_cart_line", skip(app_state, path, req_payload), fields(line_id = %path.as_ref()))]
pub async fn update_cart_line_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<UpdateCartLineRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let line_id = path.into_inner();
  let qty = cart_service::update_cart_line(app_state.store.as_ref(), line_id, req_payload.qty).await?;
  Ok(HttpResponse::Ok().json(json!({ "id": line_id, "qty": qty })))
}

#[instrument(name = "handler::remove_cart_line", skip(app_state, path), fields(line_id = %path.as_ref()))]
pub async fn remove_cart_line_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  cart_service::remove_cart_line(app_state.store.as_ref(), path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
