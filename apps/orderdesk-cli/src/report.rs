//! # Order Reports
//!
//! Human readable and JSON renderings of finished orders.
//!
//! ```text
//! --- Order 1a2b3c4d ---
//! Customer: Ana Silva
//! Date: 2024-01-15 10:30:00 UTC
//! Status: awaiting-payment
//! Items:
//!   Physical: Book, price 75.90, weight 1.2kg
//!     -> quantity 1, subtotal BRL 75.90
//! TOTAL: BRL 75.90
//! ```

use serde::Serialize;
use std::fmt;

use orderdesk_core::Order;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Text rendering of one order, amounts prefixed by `currency`.
pub struct OrderText<'a> {
    pub order: &'a Order,
    pub currency: &'a str,
}

impl fmt::Display for OrderText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.order;

        writeln!(f, "--- Order {} ---", order.id())?;
        writeln!(f, "Customer: {}", order.customer().name())?;
        writeln!(f, "Date: {}", order.placed_at().format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Status: {}", order.status())?;
        writeln!(f, "Items:")?;
        for item in order.items() {
            writeln!(f, "  {}", item.product().describe())?;
            writeln!(
                f,
                "    -> quantity {}, subtotal {}",
                item.quantity(),
                item.subtotal().format_with(self.currency)
            )?;
        }
        writeln!(f, "TOTAL: {}", order.total().format_with(self.currency))
    }
}

/// Renders one order as text, amounts prefixed by `currency`.
pub fn render_text(order: &Order, currency: &str) -> String {
    OrderText { order, currency }.to_string()
}

/// JSON envelope for `--json` output.
#[derive(Debug, Serialize)]
pub struct OrderReport<'a> {
    pub currency: &'a str,
    pub orders: &'a [Order],
}

/// Renders every order as one pretty-printed JSON document.
pub fn render_json(orders: &[Order], currency: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&OrderReport { currency, orders })
}
