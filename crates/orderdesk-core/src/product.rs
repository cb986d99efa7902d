//! # Products
//!
//! Sellable items. A product is either physical (has a weight) or digital
//! (has a download location).
//!
//! ## Type Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product                                                                │
//! │  ├── name     (non-blank)                                               │
//! │  ├── price    (Money, > 0)                                              │
//! │  └── variant                                                            │
//! │      ├── Physical { weight_kg }     weight_kg >= 0                      │
//! │      └── Digital  { download_url }  may be empty                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once built. Re-pricing produces a new value via
//! [`Product::with_price`]; items already in an order keep the price they
//! were added with.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price, validate_required, validate_weight_kg};

// =============================================================================
// Product Kind
// =============================================================================

/// The kind tag used to pick a product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Physical,
    Digital,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKind::Physical => write!(f, "PHYSICAL"),
            ProductKind::Digital => write!(f, "DIGITAL"),
        }
    }
}

/// Case-insensitive. `fisico` is kept as an alias of `physical` because
/// existing catalog feeds still send it.
impl FromStr for ProductKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physical" | "fisico" => Ok(ProductKind::Physical),
            "digital" => Ok(ProductKind::Digital),
            _ => Err(ValidationError::Unrecognized {
                field: "product kind".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// Variant-specific product data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductVariant {
    Physical { weight_kg: f64 },
    Digital { download_url: String },
}

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: Money,
    #[serde(flatten)]
    variant: ProductVariant,
}

impl Product {
    /// Creates a physical product.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::{Money, Product};
    ///
    /// let book = Product::physical("Book", Money::from_cents(7590), 1.2).unwrap();
    /// assert_eq!(book.weight_kg(), Some(1.2));
    ///
    /// assert!(Product::physical("Book", Money::from_cents(7590), -1.0).is_err());
    /// ```
    pub fn physical(name: impl Into<String>, price: Money, weight_kg: f64) -> CoreResult<Self> {
        validate_weight_kg(weight_kg)?;
        Self::validated(name.into(), price, ProductVariant::Physical { weight_kg })
    }

    /// Creates a digital product. An empty download URL is allowed.
    pub fn digital(
        name: impl Into<String>,
        price: Money,
        download_url: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::validated(
            name.into(),
            price,
            ProductVariant::Digital {
                download_url: download_url.into(),
            },
        )
    }

    fn validated(name: String, price: Money, variant: ProductVariant) -> CoreResult<Self> {
        validate_required("product name", &name)?;
        validate_price(price)?;

        Ok(Product {
            name,
            price,
            variant,
        })
    }

    /// Returns a copy of this product with a new price.
    pub fn with_price(&self, price: Money) -> CoreResult<Self> {
        Self::validated(self.name.clone(), price, self.variant.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn variant(&self) -> &ProductVariant {
        &self.variant
    }

    pub fn kind(&self) -> ProductKind {
        match self.variant {
            ProductVariant::Physical { .. } => ProductKind::Physical,
            ProductVariant::Digital { .. } => ProductKind::Digital,
        }
    }

    /// Weight in kilograms, for physical products only.
    pub fn weight_kg(&self) -> Option<f64> {
        match self.variant {
            ProductVariant::Physical { weight_kg } => Some(weight_kg),
            ProductVariant::Digital { .. } => None,
        }
    }

    /// Download location, for digital products only.
    pub fn download_url(&self) -> Option<&str> {
        match &self.variant {
            ProductVariant::Digital { download_url } => Some(download_url),
            ProductVariant::Physical { .. } => None,
        }
    }

    /// One-line human readable description used by order reports.
    ///
    /// ```text
    /// Physical: Book, price 75.90, weight 1.2kg
    /// Digital: Antivirus Pro, price 99.50, url N/A
    /// ```
    pub fn describe(&self) -> String {
        match &self.variant {
            ProductVariant::Physical { weight_kg } => format!(
                "Physical: {}, price {}, weight {}kg",
                self.name, self.price, weight_kg
            ),
            ProductVariant::Digital { download_url } => format!(
                "Digital: {}, price {}, url {}",
                self.name,
                self.price,
                if download_url.is_empty() {
                    "N/A"
                } else {
                    download_url
                }
            ),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("physical".parse::<ProductKind>().unwrap(), ProductKind::Physical);
        assert_eq!("PHYSICAL".parse::<ProductKind>().unwrap(), ProductKind::Physical);
        assert_eq!("FISICO".parse::<ProductKind>().unwrap(), ProductKind::Physical);
        assert_eq!("fisico".parse::<ProductKind>().unwrap(), ProductKind::Physical);
        assert_eq!("Digital".parse::<ProductKind>().unwrap(), ProductKind::Digital);
    }

    #[test]
    fn test_unknown_kind_names_the_tag() {
        let err = "invalido".parse::<ProductKind>().unwrap_err();
        assert!(err.to_string().contains("invalido"));

        assert!("".parse::<ProductKind>().is_err());
    }

    #[test]
    fn test_physical_product() {
        let product = Product::physical("Book", Money::from_cents(7590), 1.2).unwrap();
        assert_eq!(product.name(), "Book");
        assert_eq!(product.price().cents(), 7590);
        assert_eq!(product.kind(), ProductKind::Physical);
        assert_eq!(product.weight_kg(), Some(1.2));
        assert_eq!(product.download_url(), None);
    }

    #[test]
    fn test_digital_product() {
        let product =
            Product::digital("Ebook", Money::from_cents(2999), "http://example.com/ebook.pdf")
                .unwrap();
        assert_eq!(product.kind(), ProductKind::Digital);
        assert_eq!(product.download_url(), Some("http://example.com/ebook.pdf"));
        assert_eq!(product.weight_kg(), None);
    }

    #[test]
    fn test_invariants() {
        let price = Money::from_cents(100);
        assert!(matches!(
            Product::physical("", price, 0.0),
            Err(CoreError::InvalidArgument(ValidationError::Required { .. }))
        ));
        assert!(Product::digital("  ", price, "").is_err());
        assert!(Product::physical("A", Money::zero(), 0.0).is_err());
        assert!(Product::digital("A", Money::from_cents(-1), "").is_err());
        assert!(Product::physical("A", price, -0.5).is_err());
        assert!(Product::physical("A", price, 0.0).is_ok());
    }

    #[test]
    fn test_with_price_keeps_variant() {
        let product = Product::physical("Book", Money::from_cents(1000), 0.5).unwrap();
        let repriced = product.with_price(Money::from_cents(1500)).unwrap();
        assert_eq!(repriced.price().cents(), 1500);
        assert_eq!(repriced.weight_kg(), Some(0.5));
        assert_eq!(product.price().cents(), 1000);
        assert!(product.with_price(Money::zero()).is_err());
    }

    #[test]
    fn test_describe() {
        let book = Product::physical("Book", Money::from_cents(7590), 1.2).unwrap();
        assert_eq!(book.describe(), "Physical: Book, price 75.90, weight 1.2kg");

        let key = Product::digital("Antivirus Pro", Money::from_cents(9950), "").unwrap();
        assert_eq!(key.describe(), "Digital: Antivirus Pro, price 99.50, url N/A");
    }
}
