//! `orderdesk-reports` — role-scoped dashboard datasets.
//!
//! The dashboard figures are a fixed demo dataset per role. Derivations over
//! that dataset (current month turnover, closing balance) live here; live
//! order and inventory data stay in their own crates.

pub mod dashboard;

#[cfg(test)]
mod integration_tests;

pub use dashboard::{
    BalancePoint, CategoryVolume, Dashboard, MonthlyVolume, WonOrder, WonOrderStatus,
};
