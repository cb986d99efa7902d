//! # orderdesk-core: Pure Order Assembly Logic
//!
//! This crate is the **heart** of Orderdesk. It turns a customer, a handful of
//! products and the shared process configuration into a validated [`Order`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Orderdesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 orderdesk-cli (settings, reports)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ orderdesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  factory  │  │  builder  │  │  config   │  │ validation│  │   │
//! │  │   │ Product   │─►│ Order     │◄─│ Shared    │  │   rules   │  │   │
//! │  │   │ creation  │  │ assembly  │  │ Config    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Physical and digital products
//! - [`customer`] - Who places the order
//! - [`order`] - Finished orders and their items
//! - [`factory`] - Product creation from a kind tag
//! - [`config`] - Process-wide shared configuration
//! - [`builder`] - The order assembly state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use orderdesk_core::{Customer, ExtraArg, Money, OrderBuilder, ProductFactory, SharedConfig};
//!
//! # fn main() -> Result<(), orderdesk_core::CoreError> {
//! let config = SharedConfig::new();
//! let book = ProductFactory::create("physical", "Book", Money::from_cents(1000), &[ExtraArg::Decimal(0.5)])?;
//! let customer = Customer::new("CLI1", "Ana Silva", "ana@example.com")?;
//!
//! let order = OrderBuilder::new(&config)
//!     .with_customer(customer)?
//!     .add_item(&book, 2)?
//!     .build()?;
//!
//! assert_eq!(order.total().cents(), 2000);
//! assert_eq!(order.status(), "pending");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod config;
pub mod customer;
pub mod error;
pub mod factory;
pub mod money;
pub mod order;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use builder::OrderBuilder;
pub use config::{ConfigValues, SharedConfig};
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use factory::{ExtraArg, ProductArgs, ProductFactory};
pub use money::Money;
pub use order::{Order, OrderId, OrderItem};
pub use product::{Product, ProductKind, ProductVariant};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum number of `add_item` calls per order.
pub const DEFAULT_MAX_ITEMS_PER_ORDER: usize = 50;

/// Default ISO 4217 currency code.
pub const DEFAULT_CURRENCY: &str = "BRL";

/// Status every order starts with while it is being assembled.
pub const INITIAL_STATUS: &str = "initial-pending";

/// Status an order is promoted to at build time when the caller kept the default.
pub const PENDING_STATUS: &str = "pending";
