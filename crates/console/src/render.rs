//! Plain-text tables for the walkthrough output.

use orderdesk_inventory::InventoryLedger;
use orderdesk_reports::Dashboard;

pub fn dashboard(dashboard: &Dashboard) {
    println!();
    println!("== {} dashboard ==", dashboard.role);
    println!(
        "total orders: {}   monthly growth: {:+}%",
        dashboard.total_orders, dashboard.monthly_growth_pct
    );
    if let Some(amount) = dashboard.current_month_amount() {
        println!("current month: {amount}");
    }
    if let Some(balance) = dashboard.closing_balance() {
        println!("closing balance: {balance}");
    }

    println!();
    println!("{:<12} {:>7} {:>14}", "category", "orders", "amount");
    for entry in &dashboard.by_category {
        println!(
            "{:<12} {:>7} {:>14}",
            entry.category.label(),
            entry.orders,
            entry.amount.to_string()
        );
    }

    println!();
    println!("{:<6} {:>7} {:>14}", "month", "orders", "amount");
    for entry in &dashboard.monthly {
        println!(
            "{:<6} {:>7} {:>14}",
            entry.month,
            entry.orders,
            entry.amount.to_string()
        );
    }

    println!();
    println!("{:<7} {:>14}", "as of", "balance");
    for point in &dashboard.balance_history {
        println!("{:<7} {:>14}", point.label, point.balance.to_string());
    }

    println!();
    println!("recently won orders");
    println!(
        "{:<4} {:<20} {:<24} {:>14} {:<12} {}",
        "id", "counterparty", "product", "amount", "date", "status"
    );
    for order in &dashboard.won_orders {
        println!(
            "{:<4} {:<20} {:<24} {:>14} {:<12} {}",
            order.id,
            order.counterparty,
            order.product,
            order.amount.to_string(),
            order.date.to_string(),
            order.status
        );
    }
}

pub fn inventory(ledger: &InventoryLedger) {
    let counts = ledger.counts();
    println!();
    println!(
        "== inventory ==  total: {}  low: {}  out of stock: {}",
        counts.total, counts.low, counts.out_of_stock
    );
    println!(
        "{:<4} {:<22} {:<12} {:>5} {:>5} {:>12}  {}",
        "id", "name", "category", "qty", "min", "unit price", "status"
    );
    for row in ledger.rows() {
        println!(
            "{:<4} {:<22} {:<12} {:>5} {:>5} {:>12}  {}",
            row.id.to_string(),
            row.name,
            row.category,
            row.quantity,
            row.minimum,
            row.unit_price.to_string(),
            row.status
        );
    }

    let report = ledger.restock_report();
    if report.is_empty() {
        println!("nothing needs restocking");
        return;
    }

    println!();
    println!("needs restocking");
    println!(
        "{:<4} {:<22} {:>5} {:>5} {:>7}",
        "id", "name", "qty", "min", "needed"
    );
    for line in &report {
        println!(
            "{:<4} {:<22} {:>5} {:>5} {:>7}",
            line.id.to_string(),
            line.name,
            line.quantity,
            line.minimum,
            line.quantity_needed
        );
    }
}
