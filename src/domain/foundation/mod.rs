//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the base
//! repository contract that form the vocabulary of the ticketing domain.

mod errors;
mod ids;
mod money;
mod repository;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AddressId, CategoryId, EventId, PersonId, TicketId, VenueId};
pub use money::Money;
pub use repository::{Predicate, Repository};
pub use timestamp::Timestamp;
