// vibe_shop/server/src/state.rs

use crate::store::ShopStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ShopStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn ShopStore>) -> Self {
    Self { store }
  }
}
