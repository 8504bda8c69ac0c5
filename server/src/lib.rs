// vibe_shop/server/src/lib.rs

//! Vibe Shop: a demo storefront backend.
//!
//! One shared cart over a SQLite catalog. Adding a product that is already in
//! the cart increases that line's quantity; checkout prices either the stored
//! cart or a client-supplied snapshot, returns a receipt and empties the cart.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
