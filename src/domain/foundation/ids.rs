//! Strongly-typed identifier value objects.
//!
//! Every entity in the ticketing domain is keyed by a random UUID that is
//! assigned at construction and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a UUID-backed identifier newtype.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a person (administrator or customer).
    PersonId
);

uuid_identifier!(
    /// Unique identifier for a venue address.
    AddressId
);

uuid_identifier!(
    /// Unique identifier for a venue.
    VenueId
);

uuid_identifier!(
    /// Unique identifier for an event category.
    CategoryId
);

uuid_identifier!(
    /// Unique identifier for an event.
    EventId
);

uuid_identifier!(
    /// Unique identifier for a ticket.
    TicketId
);
