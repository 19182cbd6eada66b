use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, Money};

/// Order identifier within the book.
///
/// Assigned as `record count + 1`, the same sequence rule the inventory
/// ledger uses; orders are never removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl OrderId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Which side of the desk registered the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Purchase,
    Sale,
}

impl core::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderSide::Purchase => write!(f, "purchase"),
            OrderSide::Sale => write!(f, "sale"),
        }
    }
}

/// Closed category list offered by the registration form.
///
/// Distinct from the inventory ledger's free-form category text: the form
/// only ever submits one of these labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Home,
    Stationery,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Home,
        Category::Stationery,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Home => "Home",
            Category::Stationery => "Stationery",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {}", s.trim())))
    }
}

/// Account the order is charged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    Main,
    Secondary,
    Savings,
}

impl Account {
    pub const ALL: [Account; 3] = [Account::Main, Account::Secondary, Account::Savings];

    pub fn label(&self) -> &'static str {
        match self {
            Account::Main => "Main Account",
            Account::Secondary => "Secondary Account",
            Account::Savings => "Savings Account",
        }
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for Account {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|account| account.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown account: {}", s.trim())))
    }
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Transfer,
    Pse,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Transfer,
        PaymentMethod::Pse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::Pse => "PSE",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::validation(format!("unknown payment method: {}", s.trim()))
            })
    }
}

/// Raw registration form input.
///
/// Text fields arrive as typed; selects submit their visible labels. The
/// date picker always holds a value, so `date` is already typed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub kind: String,
    pub category: String,
    pub description: String,
    pub account: String,
    pub amount: String,
    pub payment_method: String,
    pub date: NaiveDate,
    pub notes: String,
    /// File name of an attached receipt image, if one was picked.
    pub receipt: Option<String>,
}

/// A registered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    id: OrderId,
    side: OrderSide,
    kind: String,
    category: Category,
    description: String,
    account: Account,
    amount: Money,
    payment_method: PaymentMethod,
    date: NaiveDate,
    notes: Option<String>,
    receipt: Option<String>,
    registered_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn account(&self) -> Account {
        self.account
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn receipt(&self) -> Option<&str> {
        self.receipt.as_deref()
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl Entity for OrderRecord {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Owned, in-memory order book. The sole writer of its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<OrderRecord>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form and append a new order record.
    ///
    /// The six text fields must be non-blank, the select fields must carry a
    /// known label, and the amount must contain digits once currency
    /// punctuation is stripped; otherwise the book is left untouched.
    pub fn register(
        &mut self,
        side: OrderSide,
        form: &OrderForm,
        registered_at: DateTime<Utc>,
    ) -> DomainResult<OrderRecord> {
        if form.kind.trim().is_empty() {
            return Err(DomainError::validation("order type cannot be empty"));
        }
        if form.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if form.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if form.account.trim().is_empty() {
            return Err(DomainError::validation("account cannot be empty"));
        }
        if form.amount.trim().is_empty() {
            return Err(DomainError::validation("amount cannot be empty"));
        }
        if form.payment_method.trim().is_empty() {
            return Err(DomainError::validation("payment method cannot be empty"));
        }

        let category = form.category.parse::<Category>()?;
        let account = form.account.parse::<Account>()?;
        let payment_method = form.payment_method.parse::<PaymentMethod>()?;
        let amount = parse_amount(&form.amount)?;

        let notes = match form.notes.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };

        let record = OrderRecord {
            id: OrderId::new((self.orders.len() as u32) + 1),
            side,
            kind: form.kind.trim().to_string(),
            category,
            description: form.description.trim().to_string(),
            account,
            amount,
            payment_method,
            date: form.date,
            notes,
            receipt: form.receipt.clone(),
            registered_at,
        };
        self.orders.push(record.clone());
        Ok(record)
    }

    /// Every registered order, in registration order.
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Bulk-register orders from a CSV export.
    ///
    /// Pending feature: the boundary offers it, but no parser is wired up
    /// yet, so every call reports [`DomainError::Unsupported`].
    pub fn import_csv(&mut self, source: &str) -> DomainResult<usize> {
        let _ = source;
        Err(DomainError::unsupported(
            "bulk CSV order import is not available yet",
        ))
    }
}

/// Parse a user-typed amount into whole currency units.
///
/// Currency punctuation (`$`, `.`, `,`, spaces) is ignored, matching what
/// the form's amount field lets through; any other character rejects the
/// input rather than being silently dropped.
fn parse_amount(raw: &str) -> DomainResult<Money> {
    let mut digits = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            '$' | '.' | ',' | ' ' => {}
            other => {
                return Err(DomainError::validation(format!(
                    "amount contains an invalid character: {other:?}"
                )));
            }
        }
    }
    if digits.is_empty() {
        return Err(DomainError::validation("amount must contain digits"));
    }
    let units = digits
        .parse::<u64>()
        .map_err(|_| DomainError::validation("amount is out of range"))?;
    Ok(Money::new(units))
}
