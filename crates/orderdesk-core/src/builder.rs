//! # Order Builder
//!
//! Stepwise, validating assembly of an [`Order`].
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   new(&config)                                                          │
//! │       │   id, provisional timestamp, status "initial-pending"          │
//! │       ▼                                                                 │
//! │  ┌────────────┐  with_customer / add_item / with_date /                │
//! │  │ Collecting │◄─ with_initial_status        (failed calls: no change) │
//! │  └─────┬──────┘                                                         │
//! │        │ build()  customer set, ≥ 1 item                                │
//! │        ▼                                                                │
//! │  ┌────────────┐                                                         │
//! │  │ Finalized  │  every further call → AlreadyFinalized { order_id }    │
//! │  └────────────┘                                                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item Limit
//! `add_item` reads `max_items_per_order` from the [`SharedConfig`] on every
//! call, so a change made while an order is being assembled applies to the
//! very next add. The limit counts successful `add_item` calls: adding the
//! same product twice uses two slots.
//!
//! A builder is meant for one thread. Share the config, not the builder.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::SharedConfig;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::order::{order_total, Order, OrderId, OrderItem};
use crate::product::Product;
use crate::validation::{validate_quantity, validate_required};
use crate::{INITIAL_STATUS, PENDING_STATUS};

/// Everything collected so far for the order under assembly.
#[derive(Debug)]
struct Draft {
    id: OrderId,
    customer: Option<Customer>,
    items: Vec<OrderItem>,
    placed_at: DateTime<Utc>,
    status: String,
}

#[derive(Debug)]
enum BuilderState {
    Collecting(Draft),
    Finalized { order_id: OrderId, item_count: usize },
}

/// Single-use order assembler.
///
/// ## Example
/// ```rust
/// use orderdesk_core::{CoreError, Customer, Money, OrderBuilder, Product, SharedConfig};
///
/// let config = SharedConfig::new();
/// config.set_max_items_per_order(1);
///
/// let pen = Product::physical("Pen", Money::from_cents(250), 0.01).unwrap();
/// let mut builder = OrderBuilder::new(&config);
/// builder
///     .with_customer(Customer::new("C1", "Ana", "ana@example.com").unwrap())
///     .unwrap()
///     .add_item(&pen, 4)
///     .unwrap();
///
/// assert!(matches!(builder.add_item(&pen, 1), Err(CoreError::LimitExceeded { max: 1 })));
///
/// let order = builder.build().unwrap();
/// assert_eq!(order.total().cents(), 1000);
/// ```
#[derive(Debug)]
pub struct OrderBuilder {
    config: SharedConfig,
    state: BuilderState,
}

impl OrderBuilder {
    /// Starts assembling a new order against `config`.
    pub fn new(config: &SharedConfig) -> Self {
        let draft = Draft {
            id: OrderId::generate(),
            customer: None,
            items: Vec::new(),
            placed_at: Utc::now(),
            status: INITIAL_STATUS.to_string(),
        };
        debug!(order_id = %draft.id, "Order assembly started");

        OrderBuilder {
            config: config.clone(),
            state: BuilderState::Collecting(draft),
        }
    }

    fn draft_mut(&mut self) -> CoreResult<&mut Draft> {
        match &mut self.state {
            BuilderState::Collecting(draft) => Ok(draft),
            BuilderState::Finalized { order_id, .. } => Err(CoreError::AlreadyFinalized {
                order_id: order_id.to_string(),
            }),
        }
    }

    /// Sets the customer. Last write wins.
    pub fn with_customer(&mut self, customer: Customer) -> CoreResult<&mut Self> {
        self.draft_mut()?.customer = Some(customer);
        Ok(self)
    }

    /// Adds `quantity` units of `product`, freezing its current price.
    ///
    /// ## Errors
    /// - `InvalidArgument` if `quantity <= 0`
    /// - `LimitExceeded` if the order already holds `max_items_per_order` items
    /// - `InvalidArgument` (`OutOfRange`) if `price × quantity` overflows
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<&mut Self> {
        let max = self.config.max_items_per_order();
        let draft = self.draft_mut()?;

        validate_quantity(quantity)?;

        if draft.items.len() >= max {
            debug!(order_id = %draft.id, max, "Item limit reached");
            return Err(CoreError::LimitExceeded { max });
        }

        let item = OrderItem::snapshot(product, quantity)?;
        debug!(
            order_id = %draft.id,
            product = product.name(),
            quantity,
            subtotal = %item.subtotal(),
            "Item added"
        );
        draft.items.push(item);

        Ok(self)
    }

    /// Overrides the provisional timestamp taken at construction.
    pub fn with_date(&mut self, placed_at: DateTime<Utc>) -> CoreResult<&mut Self> {
        self.draft_mut()?.placed_at = placed_at;
        Ok(self)
    }

    /// Overrides the status. Blank statuses are rejected.
    pub fn with_initial_status(&mut self, status: &str) -> CoreResult<&mut Self> {
        let draft = self.draft_mut()?;
        validate_required("status", status)?;
        draft.status = status.to_string();
        Ok(self)
    }

    /// Produces the order and finalizes the builder.
    ///
    /// Fails if the customer is missing, there are no items, or the total
    /// does not fit in `i64` cents. On failure the builder stays in
    /// `Collecting` and can be completed and built again.
    pub fn build(&mut self) -> CoreResult<Order> {
        let draft = self.draft_mut()?;

        let customer = match &draft.customer {
            None => return Err(CoreError::incomplete("customer is required")),
            Some(_) if draft.items.is_empty() => {
                return Err(CoreError::incomplete("at least one item is required"))
            }
            Some(customer) => customer.clone(),
        };
        let total = order_total(&draft.items)?;

        let status = if draft.status == INITIAL_STATUS {
            PENDING_STATUS.to_string()
        } else {
            std::mem::take(&mut draft.status)
        };
        let id = draft.id.clone();
        let items = std::mem::take(&mut draft.items);
        let placed_at = draft.placed_at;

        self.state = BuilderState::Finalized {
            order_id: id.clone(),
            item_count: items.len(),
        };

        let order = Order::finalize(id, customer, items, placed_at, status, total);
        debug!(
            order_id = %order.id(),
            items = order.item_count(),
            total = %order.total(),
            status = order.status(),
            "Order built"
        );

        Ok(order)
    }

    /// Id of the order under assembly, stable across the builder's life.
    pub fn order_id(&self) -> &OrderId {
        match &self.state {
            BuilderState::Collecting(draft) => &draft.id,
            BuilderState::Finalized { order_id, .. } => order_id,
        }
    }

    /// Number of successful `add_item` calls so far.
    pub fn item_count(&self) -> usize {
        match &self.state {
            BuilderState::Collecting(draft) => draft.items.len(),
            BuilderState::Finalized { item_count, .. } => *item_count,
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, BuilderState::Finalized { .. })
    }
}

/// A builder bound to the process-wide configuration.
impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new(SharedConfig::global())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
