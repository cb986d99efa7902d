//! # Customer
//!
//! The party placing an order. Identity is the customer id: two customers
//! with the same id are the same customer even if their names differ.

use serde::Serialize;
use std::hash::{Hash, Hasher};

use crate::error::CoreResult;
use crate::validation::{validate_email, validate_required};

/// A customer, validated at construction and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: String,
    name: String,
    email: String,
}

impl Customer {
    /// Creates a customer.
    ///
    /// ## Rules
    /// - `id` and `name` must not be blank
    /// - `email` must contain an `@`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> CoreResult<Self> {
        let (id, name, email) = (id.into(), name.into(), email.into());

        validate_required("customer id", &id)?;
        validate_required("customer name", &name)?;
        validate_email(&email)?;

        Ok(Customer { id, name, email })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
