//! Postal address owned by a venue.

use crate::domain::foundation::AddressId;
use serde::{Deserialize, Serialize};

/// Street address of a venue.
///
/// Value-like: an address is created with its venue and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            id: AddressId::new(),
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new("", "", "")
    }
}
