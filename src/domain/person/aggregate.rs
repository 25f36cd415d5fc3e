//! Person aggregate.
//!
//! A person is either an administrator or a customer. Shared fields live on
//! [`Person`]; role-specific state lives in [`PersonRole`]. When serialized
//! the role is written as a `person_type` tag next to the shared fields.

use crate::domain::foundation::{PersonId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Administrator, Customer};

/// Person aggregate - shared identity plus role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    email: String,
    #[serde(flatten)]
    role: PersonRole,
}

/// Role-specific state, tagged by `person_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "person_type", rename_all = "snake_case")]
pub enum PersonRole {
    Administrator(Administrator),
    Customer(Customer),
}

/// Discriminator of a [`PersonRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    Administrator,
    Customer,
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonType::Administrator => write!(f, "administrator"),
            PersonType::Customer => write!(f, "customer"),
        }
    }
}

impl Person {
    /// Creates a customer with no bookings.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or malformed email.
    pub fn new_customer(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(name, email, PersonRole::Customer(Customer::new()))
    }

    /// Creates an administrator managing no events.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or malformed email.
    pub fn new_administrator(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(name, email, PersonRole::Administrator(Administrator::new()))
    }

    fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: PersonRole,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        validate_email(&email)?;

        Ok(Self {
            id: PersonId::new(),
            name,
            email,
            role,
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &PersonRole {
        &self.role
    }

    pub fn person_type(&self) -> PersonType {
        match self.role {
            PersonRole::Administrator(_) => PersonType::Administrator,
            PersonRole::Customer(_) => PersonType::Customer,
        }
    }

    pub fn as_customer(&self) -> Option<&Customer> {
        match &self.role {
            PersonRole::Customer(customer) => Some(customer),
            PersonRole::Administrator(_) => None,
        }
    }

    pub fn as_customer_mut(&mut self) -> Option<&mut Customer> {
        match &mut self.role {
            PersonRole::Customer(customer) => Some(customer),
            PersonRole::Administrator(_) => None,
        }
    }

    pub fn as_administrator(&self) -> Option<&Administrator> {
        match &self.role {
            PersonRole::Administrator(admin) => Some(admin),
            PersonRole::Customer(_) => None,
        }
    }

    pub fn as_administrator_mut(&mut self) -> Option<&mut Administrator> {
        match &mut self.role {
            PersonRole::Administrator(admin) => Some(admin),
            PersonRole::Customer(_) => None,
        }
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::invalid_format(
            "email",
            "expected local-part@domain",
        )),
    }
}
