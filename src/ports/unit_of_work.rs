//! Unit-of-work port - atomic multi-entity writes.
//!
//! A booking changes two records at once: the ticket inside its event and
//! the customer's booked set. Both must land together or not at all, so
//! handlers collect their changes in a [`WriteBatch`] and hand it to
//! [`UnitOfWork::commit`].
//!
//! # Example
//!
//! ```ignore
//! let batch = WriteBatch::new()
//!     .put_person(customer)
//!     .put_ticket(event.id(), ticket);
//! unit_of_work.commit(batch).await?;
//! ```

use async_trait::async_trait;

use crate::domain::category::Category;
use crate::domain::event::{Event, Ticket};
use crate::domain::foundation::{DomainError, EventId};
use crate::domain::person::Person;

/// A single write inside a batch. Every target must already exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    /// Replace a person record.
    PutPerson(Person),
    /// Replace an event record, tickets included.
    PutEvent(Event),
    /// Replace (or append) one ticket inside an existing event.
    PutTicket { event_id: EventId, ticket: Ticket },
    /// Replace a category record.
    PutCategory(Category),
}

/// Ordered set of writes applied atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_person(mut self, person: Person) -> Self {
        self.ops.push(WriteOp::PutPerson(person));
        self
    }

    pub fn put_event(mut self, event: Event) -> Self {
        self.ops.push(WriteOp::PutEvent(event));
        self
    }

    pub fn put_ticket(mut self, event_id: EventId, ticket: Ticket) -> Self {
        self.ops.push(WriteOp::PutTicket { event_id, ticket });
        self
    }

    pub fn put_category(mut self, category: Category) -> Self {
        self.ops.push(WriteOp::PutCategory(category));
        self
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}

/// Port for committing a [`WriteBatch`].
///
/// Implementations must ensure:
/// - Either every op is applied or none is
/// - Readers never observe a partially applied batch
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Applies all writes of `batch` atomically.
    ///
    /// # Errors
    ///
    /// - `*NotFound` if any op targets a missing record; nothing is applied
    async fn commit(&self, batch: WriteBatch) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, Timestamp};

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn UnitOfWork) {}

    #[test]
    fn batch_preserves_op_order() {
        let event = Event::new("Concert", Timestamp::now()).unwrap();
        let customer = Person::new_customer("Jane", "jane@example.com").unwrap();
        let ticket = Ticket::new(Money::from_units(10), "A1");

        let batch = WriteBatch::new()
            .put_person(customer.clone())
            .put_ticket(event.id(), ticket.clone());

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.ops()[0], WriteOp::PutPerson(customer));
        assert_eq!(
            batch.ops()[1],
            WriteOp::PutTicket {
                event_id: event.id(),
                ticket
            }
        );
    }

    #[test]
    fn new_batch_is_empty() {
        assert!(WriteBatch::new().is_empty());
    }
}
