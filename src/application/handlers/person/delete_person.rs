//! DeletePersonHandler - Command handler for deleting a person.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError, TicketingLocks};
use crate::domain::foundation::PersonId;
use crate::domain::person::PersonType;
use crate::ports::PersonRepository;

/// Command to delete an administrator or customer.
#[derive(Debug, Clone)]
pub struct DeletePersonCommand {
    pub person_id: PersonId,
}

/// Result of deleting a person.
#[derive(Debug, Clone)]
pub struct DeletePersonResult {
    pub person_id: PersonId,
    pub person_type: PersonType,
    /// Tickets the customer held when deleted.
    pub affected_tickets: usize,
}

/// Handler for deleting persons.
///
/// For customers the store applies the configured customer-delete policy to
/// the booked tickets. Those tickets are locked for the duration.
pub struct DeletePersonHandler {
    persons: Arc<dyn PersonRepository>,
    locks: Arc<TicketingLocks>,
}

impl DeletePersonHandler {
    pub fn new(persons: Arc<dyn PersonRepository>, locks: Arc<TicketingLocks>) -> Self {
        Self { persons, locks }
    }

    pub async fn handle(
        &self,
        cmd: DeletePersonCommand,
    ) -> Result<DeletePersonResult, TicketingError> {
        let _person_guard = self.locks.persons.acquire(cmd.person_id).await;

        let person = self
            .persons
            .find_by_id(cmd.person_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Person, cmd.person_id))?;
        let booked = person
            .as_customer()
            .map(|c| c.booked_tickets().to_vec())
            .unwrap_or_default();
        let _ticket_guards = self.locks.tickets.acquire_all(booked.iter().copied()).await;

        self.persons.remove(cmd.person_id).await?;

        Ok(DeletePersonResult {
            person_id: cmd.person_id,
            person_type: person.person_type(),
            affected_tickets: booked.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::booking::{BookTicketCommand, BookTicketHandler};
    use crate::application::handlers::event::{CancelEventCommand, CancelEventHandler};
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::integrity::CustomerDeletePolicy;
    use crate::domain::person::BookingError;

    async fn customer_with_booking(ctx: &TestContext) -> (PersonId, crate::domain::event::Event) {
        let customer = ctx.customer("Jane").await;
        let event = ctx.event(&[50, 70]).await;
        BookTicketHandler::new(
            ctx.persons.clone(),
            ctx.events.clone(),
            ctx.unit_of_work.clone(),
            ctx.locks.clone(),
        )
        .handle(BookTicketCommand {
            customer_id: customer.id(),
            ticket_id: event.tickets()[0].id(),
        })
        .await
        .unwrap();
        (customer.id(), event)
    }

    #[tokio::test]
    async fn deleting_customer_cascades_booked_tickets_by_default() {
        let ctx = TestContext::new();
        let (customer_id, event) = customer_with_booking(&ctx).await;
        let ticket_id = event.tickets()[0].id();

        let result = DeletePersonHandler::new(ctx.persons.clone(), ctx.locks.clone())
            .handle(DeletePersonCommand {
                person_id: customer_id,
            })
            .await
            .unwrap();

        assert_eq!(result.person_type, PersonType::Customer);
        assert_eq!(result.affected_tickets, 1);
        assert!(!ctx.persons.exists(customer_id).await.unwrap());
        let stored = ctx.reload_event(&event).await;
        assert!(!stored.contains_ticket(ticket_id));
        assert_eq!(stored.tickets().len(), 1);
    }

    #[tokio::test]
    async fn release_policy_returns_tickets_to_the_pool() {
        let ctx = TestContext::with_policy(CustomerDeletePolicy::ReleaseTickets);
        let (customer_id, event) = customer_with_booking(&ctx).await;
        let ticket_id = event.tickets()[0].id();

        DeletePersonHandler::new(ctx.persons.clone(), ctx.locks.clone())
            .handle(DeletePersonCommand {
                person_id: customer_id,
            })
            .await
            .unwrap();

        let stored = ctx.reload_event(&event).await;
        assert!(stored.ticket(ticket_id).unwrap().is_available());
    }

    #[tokio::test]
    async fn release_policy_keeps_tickets_of_cancelled_event_locked() {
        let ctx = TestContext::with_policy(CustomerDeletePolicy::ReleaseTickets);
        let (customer_id, event) = customer_with_booking(&ctx).await;
        let ticket_id = event.tickets()[0].id();
        CancelEventHandler::new(ctx.events.clone(), ctx.unit_of_work.clone(), ctx.locks.clone())
            .handle(CancelEventCommand {
                event_id: event.id(),
            })
            .await
            .unwrap();

        DeletePersonHandler::new(ctx.persons.clone(), ctx.locks.clone())
            .handle(DeletePersonCommand {
                person_id: customer_id,
            })
            .await
            .unwrap();

        let stored = ctx.reload_event(&event).await;
        assert!(!stored.ticket(ticket_id).unwrap().is_available());
        let latecomer = ctx.customer("Late").await;
        let err = BookTicketHandler::new(
            ctx.persons.clone(),
            ctx.events.clone(),
            ctx.unit_of_work.clone(),
            ctx.locks.clone(),
        )
        .handle(BookTicketCommand {
            customer_id: latecomer.id(),
            ticket_id,
        })
        .await
        .unwrap_err();
        assert_eq!(
            err,
            TicketingError::Booking(BookingError::TicketUnavailable { ticket_id })
        );
    }

    #[tokio::test]
    async fn deleting_administrator_leaves_events() {
        let ctx = TestContext::new();
        let admin = ctx.administrator("Admin").await;
        let event = ctx.event(&[50]).await;

        let result = DeletePersonHandler::new(ctx.persons.clone(), ctx.locks.clone())
            .handle(DeletePersonCommand {
                person_id: admin.id(),
            })
            .await
            .unwrap();

        assert_eq!(result.person_type, PersonType::Administrator);
        assert_eq!(ctx.reload_event(&event).await, event);
    }
}
