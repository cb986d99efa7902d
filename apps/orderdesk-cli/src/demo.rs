//! # Demo Orders
//!
//! Assembles a small fixed set of orders against the shared configuration:
//! two valid orders and one that is rejected for having no customer.

use chrono::{Duration, Utc};
use tracing::{info, warn};

use orderdesk_core::{
    CoreError, CoreResult, Customer, ExtraArg, Money, Order, OrderBuilder, ProductFactory,
    SharedConfig,
};

/// What the demo produced.
#[derive(Debug, Default)]
pub struct DemoOutcome {
    pub orders: Vec<Order>,

    /// Orders that failed to assemble, with a label for the report.
    pub rejected: Vec<(String, CoreError)>,
}

/// Runs the demo. Catalog and customer errors abort the run; order assembly
/// errors are recorded in [`DemoOutcome::rejected`].
pub fn run_demo(config: &SharedConfig) -> CoreResult<DemoOutcome> {
    let book = ProductFactory::create(
        "FISICO",
        "The Lord of the Rings",
        Money::from_cents(7590),
        &[ExtraArg::Decimal(1.2)],
    )?;
    let ebook = ProductFactory::create(
        "DIGITAL",
        "Rust for Beginners Ebook",
        Money::from_cents(2999),
        &[ExtraArg::from("http://example.com/rust-ebook.pdf")],
    )?;
    let software = ProductFactory::create(
        "DIGITAL",
        "Antivirus Pro",
        Money::from_cents(9950),
        &[ExtraArg::from("http://example.com/antivirus-key")],
    )?;

    let ana = Customer::new("CLI001", "Ana Silva", "ana.silva@example.com")?;
    let bruno = Customer::new("CLI002", "Bruno Costa", "bruno.costa@example.com")?;

    let mut outcome = DemoOutcome::default();

    let first = OrderBuilder::new(config)
        .with_customer(ana)
        .and_then(|b| b.add_item(&book, 1))
        .and_then(|b| b.add_item(&ebook, 2))
        .and_then(|b| b.with_date(Utc::now() - Duration::days(1)))
        .and_then(|b| b.with_initial_status("awaiting-payment"))
        .and_then(|b| b.build());
    record(&mut outcome, "order for Ana Silva", first);

    let second = OrderBuilder::new(config)
        .with_customer(bruno)
        .and_then(|b| b.add_item(&software, 1))
        .and_then(|b| b.build());
    record(&mut outcome, "order for Bruno Costa", second);

    let without_customer = OrderBuilder::new(config)
        .add_item(&book, 1)
        .and_then(|b| b.build());
    record(&mut outcome, "order without customer", without_customer);

    info!(
        built = outcome.orders.len(),
        rejected = outcome.rejected.len(),
        "Demo finished"
    );
    Ok(outcome)
}

fn record(outcome: &mut DemoOutcome, label: &str, result: CoreResult<Order>) {
    match result {
        Ok(order) => outcome.orders.push(order),
        Err(err) => {
            warn!(label, error = %err, "Order rejected");
            outcome.rejected.push((label.to_string(), err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_builds_two_orders_and_rejects_one() {
        let config = SharedConfig::new();
        let outcome = run_demo(&config).unwrap();

        assert_eq!(outcome.orders.len(), 2);

        let first = &outcome.orders[0];
        assert_eq!(first.customer().name(), "Ana Silva");
        assert_eq!(first.status(), "awaiting-payment");
        assert_eq!(first.total().cents(), 7590 + 2 * 2999);
        assert!(first.placed_at() < Utc::now() - Duration::hours(23));

        let second = &outcome.orders[1];
        assert_eq!(second.status(), "pending");
        assert_eq!(second.total().cents(), 9950);

        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(
            outcome.rejected[0].1,
            CoreError::incomplete("customer is required")
        );
    }

    #[test]
    fn test_demo_respects_item_limit() {
        let config = SharedConfig::new();
        config.set_max_items_per_order(1);

        let outcome = run_demo(&config).unwrap();
        assert_eq!(outcome.orders.len(), 1);
        assert_eq!(outcome.orders[0].customer().name(), "Bruno Costa");
        assert!(outcome
            .rejected
            .iter()
            .any(|(_, err)| *err == CoreError::LimitExceeded { max: 1 }));
    }
}
