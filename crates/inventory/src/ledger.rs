use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, Money};

/// Product identifier within the ledger.
///
/// Assigned by the ledger as `record count + 1`; records are never deleted,
/// so the sequence is stable and gap-free.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Stock level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Available,
    Low,
    OutOfStock,
}

impl StockStatus {
    /// Classify a stock level against its restock threshold.
    ///
    /// Zero quantity always wins, even when the minimum is also zero: an
    /// empty shelf is out of stock no matter how the threshold is set.
    pub fn classify(quantity: u32, minimum: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity < minimum {
            StockStatus::Low
        } else {
            StockStatus::Available
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockStatus::Available => write!(f, "Available"),
            StockStatus::Low => write!(f, "Low"),
            StockStatus::OutOfStock => write!(f, "Out of stock"),
        }
    }
}

/// A catalogued product and its stock levels.
///
/// `status` is not stored: it is derived from `quantity` and `minimum` on
/// every read, so it can never go stale against the levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: String,
    quantity: u32,
    minimum: u32,
    unit_price: Money,
}

impl ProductRecord {
    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form category text as entered on the form.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Current classification, derived from the stored levels.
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.minimum)
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Raw add-product form input. Every field arrives as text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub minimum: String,
    pub unit_price: String,
}

/// Serializable catalogue row, the shape records take across the boundary.
///
/// The derived status is materialized here so consumers see the same field
/// the dashboard table shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub minimum: u32,
    pub unit_price: Money,
    pub status: StockStatus,
}

/// One row of the restock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockLine {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub minimum: u32,
    /// Units required to reach the minimum.
    pub quantity_needed: u32,
    pub status: StockStatus,
}

/// Summary counters shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryCounts {
    pub total: usize,
    pub low: usize,
    pub out_of_stock: usize,
}

/// Owned, in-memory product ledger.
///
/// The ledger is the single writer of its records; reads hand out borrows or
/// derived rows and never mutate. No IO, no locking, no hidden caches: the
/// counters and reports are recomputed from the records on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    products: Vec<ProductRecord>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with the demo catalogue used by the walkthrough.
    ///
    /// Seeds go through [`InventoryLedger::add_product`] like any other
    /// input, so their statuses are derived rather than declared.
    pub fn demo() -> DomainResult<Self> {
        let mut ledger = Self::new();
        for (name, category, quantity, minimum, unit_price) in [
            ("Dell Inspiron Laptop", "Electronics", "15", "10", "2500000"),
            ("LG 27\" Monitor", "Electronics", "8", "10", "980000"),
            ("Mechanical Keyboard", "Accessories", "25", "15", "320000"),
            ("Wireless Mouse", "Accessories", "3", "20", "85000"),
            ("Bluetooth Headphones", "Accessories", "0", "10", "150000"),
        ] {
            ledger.add_product(&NewProduct {
                name: name.to_string(),
                category: category.to_string(),
                quantity: quantity.to_string(),
                minimum: minimum.to_string(),
                unit_price: unit_price.to_string(),
            })?;
        }
        Ok(ledger)
    }

    /// Validate the form input and append a new record.
    ///
    /// All five fields must be non-blank and the numeric ones must parse as
    /// non-negative whole numbers; otherwise the ledger is left untouched.
    /// The new record takes the next sequence id (`record count + 1`).
    pub fn add_product(&mut self, input: &NewProduct) -> DomainResult<ProductRecord> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if input.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if input.quantity.trim().is_empty() {
            return Err(DomainError::validation("quantity cannot be empty"));
        }
        if input.minimum.trim().is_empty() {
            return Err(DomainError::validation("minimum cannot be empty"));
        }
        if input.unit_price.trim().is_empty() {
            return Err(DomainError::validation("unit price cannot be empty"));
        }

        let quantity = parse_count(&input.quantity, "quantity")?;
        let minimum = parse_count(&input.minimum, "minimum")?;
        let unit_price = parse_price(&input.unit_price)?;

        let record = ProductRecord {
            id: ProductId::new((self.products.len() as u32) + 1),
            name: input.name.trim().to_string(),
            category: input.category.trim().to_string(),
            quantity,
            minimum,
            unit_price,
        };
        self.products.push(record.clone());
        Ok(record)
    }

    /// Every record, in insertion order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Serializable view of the full catalogue, statuses included.
    pub fn rows(&self) -> Vec<ProductRow> {
        self.products
            .iter()
            .map(|p| ProductRow {
                id: p.id,
                name: p.name.clone(),
                category: p.category.clone(),
                quantity: p.quantity,
                minimum: p.minimum,
                unit_price: p.unit_price,
                status: p.status(),
            })
            .collect()
    }

    /// Products below their minimum or out of stock, in insertion order.
    pub fn restock_report(&self) -> Vec<RestockLine> {
        self.products
            .iter()
            .filter(|p| p.status() != StockStatus::Available)
            .map(|p| RestockLine {
                id: p.id,
                name: p.name.clone(),
                category: p.category.clone(),
                quantity: p.quantity,
                minimum: p.minimum,
                // Never underflows: available rows are filtered out above.
                quantity_needed: p.minimum - p.quantity,
                status: p.status(),
            })
            .collect()
    }

    /// Dashboard counters, recomputed from the records on every call.
    pub fn counts(&self) -> InventoryCounts {
        let mut counts = InventoryCounts {
            total: self.products.len(),
            low: 0,
            out_of_stock: 0,
        };
        for product in &self.products {
            match product.status() {
                StockStatus::Low => counts.low += 1,
                StockStatus::OutOfStock => counts.out_of_stock += 1,
                StockStatus::Available => {}
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn parse_count(raw: &str, field: &str) -> DomainResult<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        DomainError::validation(format!("{field} must be a non-negative whole number"))
    })
}

fn parse_price(raw: &str) -> DomainResult<Money> {
    let units = raw.trim().parse::<u64>().map_err(|_| {
        DomainError::validation("unit price must be a non-negative whole number")
    })?;
    Ok(Money::new(units))
}
