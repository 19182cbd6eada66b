use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orderdesk_core::Money;
use orderdesk_orders::Category;
use orderdesk_session::Role;

/// Order volume attributed to one catalogue category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVolume {
    pub category: Category,
    pub amount: Money,
    pub orders: u32,
}

/// Orders and turnover for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub month: String,
    pub orders: u32,
    pub amount: Money,
}

/// One point on the account balance curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub label: String,
    pub balance: Money,
}

/// Workflow state of a recently won order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WonOrderStatus {
    Approved,
    InProcess,
    Completed,
}

impl WonOrderStatus {
    /// Human-readable label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            WonOrderStatus::Approved => "Approved",
            WonOrderStatus::InProcess => "In Process",
            WonOrderStatus::Completed => "Completed",
        }
    }
}

impl core::fmt::Display for WonOrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Row of the recently-won-orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonOrder {
    pub id: u32,
    pub counterparty: String,
    pub product: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub status: WonOrderStatus,
}

/// The complete dashboard dataset for one role.
///
/// Every figure is part of a fixed demo dataset chosen per role. Orders
/// registered through [`orderdesk_orders::OrderBook`] deliberately do not
/// feed back into these numbers; the dashboard is a showcase, not a report
/// over live data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub role: Role,
    pub total_orders: u32,
    pub monthly_growth_pct: i32,
    pub by_category: Vec<CategoryVolume>,
    pub monthly: Vec<MonthlyVolume>,
    pub balance_history: Vec<BalancePoint>,
    pub won_orders: Vec<WonOrder>,
}

impl Dashboard {
    /// The demo dataset a user with this role sees after sign-in.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Buyer => Self::buyer(),
            Role::Seller => Self::seller(),
        }
    }

    /// Turnover of the most recent month on record.
    pub fn current_month_amount(&self) -> Option<Money> {
        self.monthly.last().map(|entry| entry.amount)
    }

    /// Latest point on the balance curve.
    pub fn closing_balance(&self) -> Option<Money> {
        self.balance_history.last().map(|point| point.balance)
    }

    fn buyer() -> Self {
        Self {
            role: Role::Buyer,
            total_orders: 45,
            monthly_growth_pct: 12,
            by_category: vec![
                category_volume(Category::Electronics, 450_000, 12),
                category_volume(Category::Clothing, 280_000, 8),
                category_volume(Category::Food, 320_000, 15),
                category_volume(Category::Home, 180_000, 6),
                category_volume(Category::Other, 120_000, 4),
            ],
            monthly: vec![
                monthly_volume("Jan", 15, 850_000),
                monthly_volume("Feb", 18, 920_000),
                monthly_volume("Mar", 22, 1_150_000),
                monthly_volume("Apr", 20, 1_050_000),
                monthly_volume("May", 25, 1_350_000),
            ],
            balance_history: vec![
                balance_point("Jan 01", 500_000),
                balance_point("Jan 15", 320_000),
                balance_point("Feb 01", 450_000),
                balance_point("Feb 15", 280_000),
                balance_point("Mar 01", 380_000),
                balance_point("Mar 15", 520_000),
            ],
            won_orders: vec![
                won_order(
                    1,
                    "ABC Distributors",
                    "Dell Laptop",
                    2_500_000,
                    demo_date(2025, 10, 1),
                    WonOrderStatus::Approved,
                ),
                won_order(
                    2,
                    "Tech Solutions",
                    "Samsung 27\" Monitor",
                    980_000,
                    demo_date(2025, 10, 2),
                    WonOrderStatus::InProcess,
                ),
                won_order(
                    3,
                    "Office Supply Co.",
                    "Ergonomic Chair",
                    450_000,
                    demo_date(2025, 10, 3),
                    WonOrderStatus::Approved,
                ),
                won_order(
                    4,
                    "Electro Wholesale",
                    "HP Printer",
                    780_000,
                    demo_date(2025, 9, 28),
                    WonOrderStatus::Completed,
                ),
            ],
        }
    }

    fn seller() -> Self {
        Self {
            role: Role::Seller,
            total_orders: 135,
            monthly_growth_pct: 18,
            by_category: vec![
                category_volume(Category::Electronics, 1_250_000, 28),
                category_volume(Category::Clothing, 680_000, 35),
                category_volume(Category::Food, 920_000, 42),
                category_volume(Category::Home, 580_000, 18),
                category_volume(Category::Other, 320_000, 12),
            ],
            monthly: vec![
                monthly_volume("Jan", 32, 2_150_000),
                monthly_volume("Feb", 38, 2_420_000),
                monthly_volume("Mar", 45, 2_850_000),
                monthly_volume("Apr", 42, 2_650_000),
                monthly_volume("May", 52, 3_750_000),
            ],
            balance_history: vec![
                balance_point("Jan 01", 1_200_000),
                balance_point("Jan 15", 1_650_000),
                balance_point("Feb 01", 1_450_000),
                balance_point("Feb 15", 1_880_000),
                balance_point("Mar 01", 2_150_000),
                balance_point("Mar 15", 2_420_000),
            ],
            won_orders: vec![
                won_order(
                    1,
                    "XYZ Enterprises",
                    "Dell Laptop x10",
                    5_200_000,
                    demo_date(2025, 10, 1),
                    WonOrderStatus::Approved,
                ),
                won_order(
                    2,
                    "Tech Corp",
                    "LG 24\" Monitor x15",
                    3_850_000,
                    demo_date(2025, 10, 2),
                    WonOrderStatus::InProcess,
                ),
                won_order(
                    3,
                    "Office Solutions",
                    "Ergonomic Chairs x20",
                    2_780_000,
                    demo_date(2025, 10, 3),
                    WonOrderStatus::Approved,
                ),
                won_order(
                    4,
                    "Retail Plus",
                    "Samsung Tablets x25",
                    4_120_000,
                    demo_date(2025, 9, 28),
                    WonOrderStatus::Completed,
                ),
            ],
        }
    }
}

fn category_volume(category: Category, amount: u64, orders: u32) -> CategoryVolume {
    CategoryVolume {
        category,
        amount: Money::new(amount),
        orders,
    }
}

fn monthly_volume(month: &str, orders: u32, amount: u64) -> MonthlyVolume {
    MonthlyVolume {
        month: month.to_string(),
        orders,
        amount: Money::new(amount),
    }
}

fn balance_point(label: &str, balance: u64) -> BalancePoint {
    BalancePoint {
        label: label.to_string(),
        balance: Money::new(balance),
    }
}

fn won_order(
    id: u32,
    counterparty: &str,
    product: &str,
    amount: u64,
    date: NaiveDate,
    status: WonOrderStatus,
) -> WonOrder {
    WonOrder {
        id,
        counterparty: counterparty.to_string(),
        product: product.to_string(),
        amount: Money::new(amount),
        date,
        status,
    }
}

// The dataset only ever holds literal dates.
fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo dates are valid")
}
