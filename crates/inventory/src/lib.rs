//! Inventory ledger domain module.
//!
//! This crate contains the business rules for the product catalogue,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod ledger;

pub use ledger::{
    InventoryCounts, InventoryLedger, NewProduct, ProductId, ProductRecord, ProductRow,
    RestockLine, StockStatus,
};
