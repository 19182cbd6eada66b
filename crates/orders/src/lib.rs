//! Order registration domain module.
//!
//! This crate contains the business rules for registering purchases and
//! sales, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod order;

pub use order::{
    Account, Category, OrderBook, OrderForm, OrderId, OrderRecord, OrderSide, PaymentMethod,
};
