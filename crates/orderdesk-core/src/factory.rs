//! # Product Factory
//!
//! Creates [`Product`] values from a kind tag.
//!
//! ## Two Entry Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  create("FISICO", name, price, &[ExtraArg])   loose, catalog feeds      │
//! │        │                                                                │
//! │        │  parse kind tag (case-insensitive)                             │
//! │        │  resolve extras → ProductArgs   (wrong shape: warn, default)   │
//! │        ▼                                                                │
//! │  build(name, price, ProductArgs)              typed, preferred          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Product::physical / Product::digital         invariants checked here   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed extra argument is not an error: the product is still created
//! with the variant default (weight `0.0`, empty download URL) and a warning
//! is logged.

use std::fmt;
use tracing::{debug, warn};

use crate::error::CoreResult;
use crate::money::Money;
use crate::product::{Product, ProductKind};

// =============================================================================
// Extra Arguments
// =============================================================================

/// A loosely-typed extra argument as received from external callers.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraArg {
    Decimal(f64),
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl ExtraArg {
    /// Name of the argument's shape, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            ExtraArg::Decimal(_) => "decimal",
            ExtraArg::Text(_) => "text",
            ExtraArg::Integer(_) => "integer",
            ExtraArg::Flag(_) => "flag",
        }
    }
}

impl fmt::Display for ExtraArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraArg::Decimal(v) => write!(f, "{v}"),
            ExtraArg::Text(v) => write!(f, "{v:?}"),
            ExtraArg::Integer(v) => write!(f, "{v}"),
            ExtraArg::Flag(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ExtraArg {
    fn from(v: f64) -> Self {
        ExtraArg::Decimal(v)
    }
}

impl From<&str> for ExtraArg {
    fn from(v: &str) -> Self {
        ExtraArg::Text(v.to_string())
    }
}

impl From<String> for ExtraArg {
    fn from(v: String) -> Self {
        ExtraArg::Text(v)
    }
}

impl From<i64> for ExtraArg {
    fn from(v: i64) -> Self {
        ExtraArg::Integer(v)
    }
}

impl From<bool> for ExtraArg {
    fn from(v: bool) -> Self {
        ExtraArg::Flag(v)
    }
}

// =============================================================================
// Typed Arguments
// =============================================================================

/// Variant-specific construction arguments. `None` means "use the default".
#[derive(Debug, Clone, PartialEq)]
pub enum ProductArgs {
    Physical { weight_kg: Option<f64> },
    Digital { download_url: Option<String> },
}

impl ProductArgs {
    /// Resolves loose extras for `kind`, keeping only `extra[0]`.
    ///
    /// A first argument of the wrong shape is dropped with a warning.
    pub fn resolve(kind: ProductKind, extra: &[ExtraArg]) -> Self {
        let first = extra.first();

        match kind {
            ProductKind::Physical => {
                let weight_kg = match first {
                    Some(ExtraArg::Decimal(w)) => Some(*w),
                    Some(other) => {
                        warn!(
                            kind = %kind,
                            shape = other.shape(),
                            value = %other,
                            "Expected a decimal weight; defaulting to 0.0"
                        );
                        None
                    }
                    None => None,
                };
                ProductArgs::Physical { weight_kg }
            }
            ProductKind::Digital => {
                let download_url = match first {
                    Some(ExtraArg::Text(url)) => Some(url.clone()),
                    Some(other) => {
                        warn!(
                            kind = %kind,
                            shape = other.shape(),
                            value = %other,
                            "Expected a text download URL; defaulting to empty"
                        );
                        None
                    }
                    None => None,
                };
                ProductArgs::Digital { download_url }
            }
        }
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            ProductArgs::Physical { .. } => ProductKind::Physical,
            ProductArgs::Digital { .. } => ProductKind::Digital,
        }
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Stateless product factory.
pub struct ProductFactory;

impl ProductFactory {
    /// Creates a product from a kind tag and loose extra arguments.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::{ExtraArg, Money, ProductFactory, ProductKind};
    ///
    /// let book = ProductFactory::create(
    ///     "FISICO",
    ///     "Book",
    ///     Money::from_cents(7590),
    ///     &[ExtraArg::Decimal(1.2)],
    /// ).unwrap();
    /// assert_eq!(book.kind(), ProductKind::Physical);
    /// assert_eq!(book.weight_kg(), Some(1.2));
    ///
    /// let err = ProductFactory::create("invalido", "X", Money::from_cents(100), &[]).unwrap_err();
    /// assert!(err.to_string().contains("invalido"));
    /// ```
    ///
    /// ## Errors
    /// - `InvalidArgument(Unrecognized)` for an unknown or blank kind tag
    /// - `InvalidArgument` for product invariant violations (blank name,
    ///   non-positive price, negative weight)
    pub fn create(
        kind: &str,
        name: impl Into<String>,
        price: Money,
        extra: &[ExtraArg],
    ) -> CoreResult<Product> {
        let kind: ProductKind = kind.parse()?;
        Self::build(name, price, ProductArgs::resolve(kind, extra))
    }

    /// Creates a product from typed arguments.
    pub fn build(name: impl Into<String>, price: Money, args: ProductArgs) -> CoreResult<Product> {
        let product = match args {
            ProductArgs::Physical { weight_kg } => {
                Product::physical(name, price, weight_kg.unwrap_or(0.0))?
            }
            ProductArgs::Digital { download_url } => {
                Product::digital(name, price, download_url.unwrap_or_default())?
            }
        };

        debug!(kind = %product.kind(), name = product.name(), price = %product.price(), "Product created");
        Ok(product)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
