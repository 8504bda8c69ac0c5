// vibe_shop/server/src/models/mod.rs

//! Data structures for catalog rows, cart ledger rows and receipts.

pub mod cart_item;
pub mod product;
pub mod receipt;

pub use cart_item::{AddedCartLine, CartEntry, CartLine, CartView};
pub use product::Product;
pub use receipt::{Receipt, ReceiptLine};
