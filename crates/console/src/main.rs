//! Scripted walkthrough of the order desk.
//!
//! Runs one seller session end to end: sign-in, dashboard, order
//! registration (including a rejected form), the inventory catalogue, and
//! sign-out. Rejections are part of the script; they log a warning and the
//! walkthrough moves on.

use anyhow::Context;
use chrono::Utc;

use orderdesk_inventory::{InventoryLedger, NewProduct};
use orderdesk_orders::{OrderBook, OrderForm, OrderSide};
use orderdesk_reports::Dashboard;
use orderdesk_session::{Credentials, Role, SessionStore};

mod render;

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let mut session = SessionStore::new();

    // A sign-in attempt without a password is turned away.
    let incomplete = Credentials {
        email: "sam@orderdesk.test".to_string(),
        password: String::new(),
    };
    if let Err(err) = session.sign_in(&incomplete, Role::Seller) {
        tracing::warn!("sign-in rejected: {err}");
    }

    let credentials = Credentials {
        email: "sam@orderdesk.test".to_string(),
        password: "demo-password".to_string(),
    };
    let role = session
        .sign_in(&credentials, Role::Seller)
        .context("demo sign-in failed")?;
    tracing::info!("signed in as {role}");

    let dashboard = Dashboard::for_role(role);
    render::dashboard(&dashboard);

    // Register one sale through the order form.
    let mut book = OrderBook::new();
    let form = OrderForm {
        kind: "Wholesale sale".to_string(),
        category: "Electronics".to_string(),
        description: "Ten refurbished laptops".to_string(),
        account: "Main Account".to_string(),
        amount: "$5.200.000".to_string(),
        payment_method: "Transfer".to_string(),
        date: Utc::now().date_naive(),
        notes: "pickup from the annex".to_string(),
        receipt: None,
    };
    let order = book
        .register(OrderSide::Sale, &form, Utc::now())
        .context("order registration failed")?;
    tracing::info!(
        order = %order.id_typed(),
        amount = %order.amount(),
        "order registered"
    );

    // An incomplete form never reaches the book.
    let mut blank_amount = form.clone();
    blank_amount.amount = String::new();
    if let Err(err) = book.register(OrderSide::Sale, &blank_amount, Utc::now()) {
        tracing::warn!("registration rejected: {err}");
    }

    // Bulk import is offered on the boundary but not wired up yet.
    if let Err(err) = book.import_csv("pending-orders.csv") {
        tracing::info!("{err}");
    }

    // The inventory page opens on the demo catalogue.
    let mut ledger = InventoryLedger::demo()?;
    render::inventory(&ledger);

    let added = ledger.add_product(&NewProduct {
        name: "USB-C Dock".to_string(),
        category: "Accessories".to_string(),
        quantity: "2".to_string(),
        minimum: "5".to_string(),
        unit_price: "210000".to_string(),
    })?;
    tracing::info!(product = %added.id_typed(), "product added");
    render::inventory(&ledger);

    if let Some(role) = session.sign_out() {
        tracing::info!("signed out of the {role} session");
    }

    Ok(())
}
