//! # Orders
//!
//! The entities produced by [`OrderBuilder`](crate::builder::OrderBuilder).
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order                                                                  │
//! │  ├── id         short token, assigned when assembly starts              │
//! │  ├── customer   required                                                │
//! │  ├── items      insertion order, never empty                            │
//! │  │   └── OrderItem { product, quantity, unit_price (frozen), subtotal }│
//! │  ├── placed_at  assembly start unless overridden                        │
//! │  ├── status     free text, "pending" by default                         │
//! │  └── total      Σ item subtotals, computed once at build time          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An `Order` can only be created by the builder and exposes no mutators, so
//! the item list can't drift away from the total.
//!
//! Subtotals and totals use checked cent arithmetic. A line or order whose
//! amount does not fit in `i64` cents is rejected with
//! [`ValidationError::OutOfRange`] instead of wrapping.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::product::Product;
use crate::validation::validate_quantity;

/// Length of the short order token.
const ORDER_ID_LEN: usize = 8;

// =============================================================================
// Order Id
// =============================================================================

/// Short order identifier (first 8 hex digits of a v4 UUID).
///
/// Collisions are astronomically unlikely within one run; this id is not
/// meant to be globally unique across systems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generates a fresh id.
    pub fn generate() -> Self {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(ORDER_ID_LEN);
        OrderId(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line in an order.
/// Uses the snapshot pattern: the unit price is frozen when the item is added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    product: Product,
    quantity: i64,
    unit_price: Money,
    subtotal: Money,
}

impl OrderItem {
    /// Creates an item, freezing the product's current price.
    pub(crate) fn snapshot(product: &Product, quantity: i64) -> CoreResult<Self> {
        validate_quantity(quantity)?;

        let unit_price = product.price();
        if !unit_price.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "unit price".to_string(),
            }
            .into());
        }

        let subtotal = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| amount_out_of_range("subtotal"))?;

        Ok(OrderItem {
            product: product.clone(),
            quantity,
            unit_price,
            subtotal,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price per unit at the moment the item was added.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// `unit_price × quantity`, computed when the item was added.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }
}

/// Sum of the item subtotals.
pub(crate) fn order_total(items: &[OrderItem]) -> CoreResult<Money> {
    items
        .iter()
        .try_fold(Money::zero(), |total, item| total.checked_add(item.subtotal))
        .ok_or_else(|| amount_out_of_range("order total"))
}

fn amount_out_of_range(field: &str) -> CoreError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    }
    .into()
}

// =============================================================================
// Order
// =============================================================================

/// A fully assembled order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    items: Vec<OrderItem>,
    placed_at: DateTime<Utc>,
    status: String,
    total: Money,
}

impl Order {
    /// Assembles the final order. Callers guarantee `items` is non-empty and
    /// `total` came from [`order_total`] over the same items.
    pub(crate) fn finalize(
        id: OrderId,
        customer: Customer,
        items: Vec<OrderItem>,
        placed_at: DateTime<Utc>,
        status: String,
        total: Money,
    ) -> Self {
        Order {
            id,
            customer,
            items,
            placed_at,
            status,
            total,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Read-only view of the items, in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Owned copy of the items for callers that need to keep them around.
    pub fn items_snapshot(&self) -> Vec<OrderItem> {
        self.items.clone()
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Grand total, computed once when the order was built.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Number of lines in the order.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities. Bounded by the total, since every unit price is
    /// at least one cent.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(OrderItem::quantity).sum()
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(price_cents: i64) -> Product {
        Product::physical("Book", Money::from_cents(price_cents), 0.5).unwrap()
    }

    fn customer() -> Customer {
        Customer::new("CLI1", "Ana", "ana@example.com").unwrap()
    }

    fn finalize(items: Vec<OrderItem>, status: &str) -> Order {
        let total = order_total(&items).unwrap();
        Order::finalize(
            OrderId::generate(),
            customer(),
            items,
            Utc::now(),
            status.to_string(),
            total,
        )
    }

    #[test]
    fn test_order_id_is_short_and_fresh() {
        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_eq!(a.as_str().len(), ORDER_ID_LEN);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_item_subtotal() {
        let item = OrderItem::snapshot(&book(1000), 2).unwrap();
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.unit_price().cents(), 1000);
        assert_eq!(item.subtotal().cents(), 2000);
    }

    #[test]
    fn test_item_rejects_non_positive_quantity() {
        assert!(matches!(
            OrderItem::snapshot(&book(1000), 0),
            Err(CoreError::InvalidArgument(ValidationError::MustBePositive { .. }))
        ));
        assert!(OrderItem::snapshot(&book(1000), -3).is_err());
    }

    #[test]
    fn test_item_price_is_frozen() {
        let original = book(1000);
        let item = OrderItem::snapshot(&original, 1).unwrap();

        let repriced = original.with_price(Money::from_cents(5000)).unwrap();
        assert_eq!(repriced.price().cents(), 5000);
        assert_eq!(item.unit_price().cents(), 1000);
        assert_eq!(item.subtotal().cents(), 1000);
    }

    #[test]
    fn test_finalize_computes_total() {
        let items = vec![
            OrderItem::snapshot(&book(1000), 2).unwrap(),
            OrderItem::snapshot(&book(500), 3).unwrap(),
        ];
        let order = finalize(items, "pending");

        assert_eq!(order.total().cents(), 3500);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total_quantity(), 5);
        assert_eq!(order.items_snapshot().len(), 2);
    }

    #[test]
    fn test_order_equality_by_id() {
        let a = finalize(vec![OrderItem::snapshot(&book(1000), 1).unwrap()], "a");
        let mut b = finalize(vec![OrderItem::snapshot(&book(2000), 1).unwrap()], "b");
        assert_ne!(a, b);

        b.id = a.id.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_item_subtotal_overflow_is_rejected() {
        assert!(matches!(
            OrderItem::snapshot(&book(100), i64::MAX / 10),
            Err(CoreError::InvalidArgument(ValidationError::OutOfRange { ref field, .. }))
                if field == "subtotal"
        ));

        let largest = OrderItem::snapshot(&book(1), i64::MAX).unwrap();
        assert_eq!(largest.subtotal().cents(), i64::MAX);
    }

    #[test]
    fn test_order_total_overflow_is_rejected() {
        let items = vec![
            OrderItem::snapshot(&book(1), i64::MAX).unwrap(),
            OrderItem::snapshot(&book(1), 1).unwrap(),
        ];
        assert!(matches!(
            order_total(&items),
            Err(CoreError::InvalidArgument(ValidationError::OutOfRange { ref field, .. }))
                if field == "order total"
        ));
        assert_eq!(order_total(&[]).unwrap(), Money::zero());
    }

    #[test]
    fn test_order_json_shape() {
        let ebook =
            Product::digital("Ebook", Money::from_cents(2999), "http://example.com/e.pdf").unwrap();
        let items = vec![
            OrderItem::snapshot(&book(7590), 1).unwrap(),
            OrderItem::snapshot(&ebook, 2).unwrap(),
        ];
        let order = finalize(items, "pending");

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], order.id().as_str());
        assert_eq!(value["status"], "pending");
        assert_eq!(value["total"], 13588);
        assert_eq!(value["customer"]["id"], "CLI1");

        let physical = &value["items"][0];
        assert_eq!(physical["quantity"], 1);
        assert_eq!(physical["unit_price"], 7590);
        assert_eq!(physical["subtotal"], 7590);
        assert_eq!(physical["product"]["kind"], "physical");
        assert_eq!(physical["product"]["weight_kg"], 0.5);

        let digital = &value["items"][1];
        assert_eq!(digital["subtotal"], 5998);
        assert_eq!(digital["product"]["kind"], "digital");
        assert_eq!(digital["product"]["download_url"], "http://example.com/e.pdf");
    }
}
