//! Person repository port.
//!
//! Administrators and customers share one collection keyed by `PersonId`;
//! the role travels with the record as its discriminator.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PersonId, Repository, TicketId};
use crate::domain::person::Person;

/// Repository port for [`Person`] records.
///
/// `remove` on a customer applies the store's configured
/// [`CustomerDeletePolicy`](crate::domain::integrity::CustomerDeletePolicy)
/// to the customer's booked tickets.
#[async_trait]
pub trait PersonRepository: Repository<Person, PersonId> {
    /// Finds a person by email address (exact match).
    async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError>;

    /// Finds the customer currently holding `ticket_id`, if any.
    async fn find_holder_of(&self, ticket_id: TicketId) -> Result<Option<Person>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn PersonRepository) {}
}
