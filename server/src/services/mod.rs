// vibe_shop/server/src/services/mod.rs

//! Cart and checkout business rules, written against the [`ShopStore`] port.
//!
//! [`ShopStore`]: crate::store::ShopStore

pub mod cart_service;
pub mod checkout_service;
pub mod pricing;
