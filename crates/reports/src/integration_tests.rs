//! Integration tests for the full dashboard session flow.
//!
//! Tests: Sign-in → Dashboard → Order registration → Inventory ledger → Sign-out
//!
//! Verifies:
//! - Each role lands on its own dashboard dataset
//! - Registrations and ledger writes leave the fixed dashboard figures alone
//! - Rejected input leaves every store unchanged

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, Utc};

    use orderdesk_core::{DomainError, Money};
    use orderdesk_inventory::{InventoryLedger, NewProduct, StockStatus};
    use orderdesk_orders::{OrderBook, OrderForm, OrderId, OrderSide};
    use orderdesk_session::{Credentials, Role, SessionStore};

    use crate::dashboard::Dashboard;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn demo_credentials() -> Credentials {
        Credentials {
            email: "demo@orderdesk.test".to_string(),
            password: "demo".to_string(),
        }
    }

    fn sale_form() -> OrderForm {
        OrderForm {
            kind: "Wholesale sale".to_string(),
            category: "Electronics".to_string(),
            description: "Ten refurbished laptops".to_string(),
            account: "Main Account".to_string(),
            amount: "$5.200.000".to_string(),
            payment_method: "Transfer".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
            notes: String::new(),
            receipt: None,
        }
    }

    fn dock_input() -> NewProduct {
        NewProduct {
            name: "USB-C Dock".to_string(),
            category: "Accessories".to_string(),
            quantity: "2".to_string(),
            minimum: "5".to_string(),
            unit_price: "210000".to_string(),
        }
    }

    #[test]
    fn seller_session_covers_the_full_dashboard_flow() {
        // Sign in with the seller role selected
        let mut session = SessionStore::new();
        let role = session.sign_in(&demo_credentials(), Role::Seller).unwrap();
        assert_eq!(role, Role::Seller);

        // The seller dashboard with its headline figures
        let dashboard = Dashboard::for_role(role);
        assert_eq!(dashboard.total_orders, 135);
        assert_eq!(dashboard.monthly_growth_pct, 18);
        assert_eq!(dashboard.current_month_amount(), Some(Money::new(3_750_000)));
        assert_eq!(dashboard.closing_balance(), Some(Money::new(2_420_000)));

        // Register a sale
        let mut book = OrderBook::new();
        let order = book
            .register(OrderSide::Sale, &sale_form(), test_time())
            .unwrap();
        assert_eq!(order.id_typed(), OrderId::new(1));
        assert_eq!(order.amount(), Money::new(5_200_000));

        // The dashboard dataset is fixed; the registration does not move it
        let dashboard_after = Dashboard::for_role(role);
        assert_eq!(dashboard_after.total_orders, 135);
        assert_eq!(dashboard_after, dashboard);

        // The inventory page opens on the demo catalogue
        let mut ledger = InventoryLedger::demo().unwrap();
        let counts = ledger.counts();
        assert_eq!(counts.total, 5);
        assert_eq!(counts.low, 2);
        assert_eq!(counts.out_of_stock, 1);

        // Add a product and watch the counters move
        let product = ledger.add_product(&dock_input()).unwrap();
        assert_eq!(product.id_typed().0, 6);
        assert_eq!(product.status(), StockStatus::Low);

        let counts = ledger.counts();
        assert_eq!(counts.total, 6);
        assert_eq!(counts.low, 3);
        assert_eq!(counts.out_of_stock, 1);

        // The new product joins the restock report
        let report = ledger.restock_report();
        assert_eq!(report.len(), 4);
        assert_eq!(report[3].name, "USB-C Dock");
        assert_eq!(report[3].quantity_needed, 3);

        // Sign out
        assert_eq!(session.sign_out(), Some(Role::Seller));
        assert!(!session.is_signed_in());
    }

    #[test]
    fn buyer_session_lands_on_the_buyer_dashboard() {
        let mut session = SessionStore::new();
        let role = session.sign_in(&demo_credentials(), Role::Buyer).unwrap();

        let dashboard = Dashboard::for_role(role);
        assert_eq!(dashboard.role, Role::Buyer);
        assert_eq!(dashboard.total_orders, 45);
        assert_eq!(dashboard.monthly_growth_pct, 12);
        assert_eq!(dashboard.current_month_amount(), Some(Money::new(1_350_000)));
        assert_eq!(dashboard.closing_balance(), Some(Money::new(520_000)));

        assert_eq!(session.sign_out(), Some(Role::Buyer));
    }

    #[test]
    fn failed_sign_in_leaves_the_session_empty() {
        let mut session = SessionStore::new();
        let input = Credentials {
            email: "demo@orderdesk.test".to_string(),
            password: "   ".to_string(),
        };

        let err = session.sign_in(&input, Role::Seller).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("password")),
            _ => panic!("Expected Validation error for blank password"),
        }
        assert!(!session.is_signed_in());
        assert_eq!(session.active_role(), None);
    }

    #[test]
    fn rejected_registration_leaves_the_book_untouched() {
        let mut book = OrderBook::new();

        let mut form = sale_form();
        form.amount = "   ".to_string();
        assert!(book.register(OrderSide::Sale, &form, test_time()).is_err());
        assert!(book.is_empty());

        // The next accepted order still takes the first id
        let order = book
            .register(OrderSide::Sale, &sale_form(), test_time())
            .unwrap();
        assert_eq!(order.id_typed(), OrderId::new(1));
    }

    #[test]
    fn csv_import_reports_unsupported_without_registering() {
        let mut book = OrderBook::new();

        let err = book.import_csv("orders-export.csv").unwrap_err();
        match err {
            DomainError::Unsupported(msg) => assert!(msg.contains("CSV")),
            _ => panic!("Expected Unsupported error for CSV import"),
        }
        assert!(book.is_empty());
    }
}
