//! # Validation Module
//!
//! Input validation rules shared by products, customers and the builder.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Happen                                │
//! │                                                                         │
//! │  Construction time (eager)                                             │
//! │  ├── Product::physical / Product::digital  → name, price, weight       │
//! │  ├── Customer::new                         → id, name, email shape     │
//! │  └── OrderBuilder setters                  → quantity, status          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Build time (deferred)                                                 │
//! │  └── OrderBuilder::build                   → customer set, items > 0   │
//! │                                                                         │
//! │  Intermediate builder states may be incomplete; only the final order   │
//! │  has to be.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is present and not blank.
///
/// ## Example
/// ```rust
/// use orderdesk_core::validation::validate_required;
///
/// assert!(validate_required("product name", "Book").is_ok());
/// assert!(validate_required("product name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a contact email.
///
/// ## Rules
/// - Must not be empty
/// - Must contain an `@`
///
/// This is a shape check, not RFC 5322 validation.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("customer email", email)?;

    if !email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "customer email".to_string(),
            reason: "must contain '@'".to_string(),
        });
    }

    Ok(())
}

/// Validates a currency code.
///
/// ## Rules
/// - Must not be blank
/// - Must be 3 ASCII letters (ISO 4217 shape)
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();
    validate_required("currency", code)?;

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a 3-letter ISO 4217 code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value (must be > 0).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price. Free products are not sellable, so zero is rejected.
///
/// ## Example
/// ```rust
/// use orderdesk_core::money::Money;
/// use orderdesk_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a weight in kilograms (zero allowed, negative and NaN are not).
pub fn validate_weight_kg(weight_kg: f64) -> ValidationResult<()> {
    if !weight_kg.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "weight".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if weight_kg < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "weight".to_string(),
        });
    }

    Ok(())
}

/// Validates an item cap coming from untrusted input (settings, env).
pub fn validate_max_items(max: i64) -> ValidationResult<()> {
    if max <= 0 {
        return Err(ValidationError::OutOfRange {
            field: "max_items_per_order".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Book").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", " \t").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("a@").is_ok());
        assert!(validate_email("").is_err());
        assert!(matches!(
            validate_email("ana.example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("BRL").is_ok());
        assert!(validate_currency_code("usd").is_ok());
        assert!(validate_currency_code("").is_err());
        assert!(validate_currency_code("EURO").is_err());
        assert!(validate_currency_code("U$D").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight_kg(0.0).is_ok());
        assert!(validate_weight_kg(1.2).is_ok());
        assert!(validate_weight_kg(-0.1).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_max_items() {
        assert!(validate_max_items(1).is_ok());
        assert!(validate_max_items(0).is_err());
        assert!(validate_max_items(-5).is_err());
    }
}
