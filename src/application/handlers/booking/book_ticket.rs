//! BookTicketHandler - Command handler for booking a ticket.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError, TicketingLocks};
use crate::domain::event::Ticket;
use crate::domain::foundation::{EventId, PersonId, TicketId};
use crate::domain::person::Person;
use crate::ports::{EventRepository, PersonRepository, UnitOfWork, WriteBatch};

/// Command to book a ticket for a customer.
#[derive(Debug, Clone)]
pub struct BookTicketCommand {
    pub customer_id: PersonId,
    pub ticket_id: TicketId,
}

/// Result of a successful booking.
#[derive(Debug, Clone)]
pub struct BookTicketResult {
    pub customer: Person,
    pub event_id: EventId,
    pub ticket: Ticket,
}

/// Handler for booking tickets.
///
/// The customer's booked set and the ticket flag are committed together, so
/// no reader ever sees one without the other.
pub struct BookTicketHandler {
    persons: Arc<dyn PersonRepository>,
    events: Arc<dyn EventRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    locks: Arc<TicketingLocks>,
}

impl BookTicketHandler {
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        events: Arc<dyn EventRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        locks: Arc<TicketingLocks>,
    ) -> Self {
        Self {
            persons,
            events,
            unit_of_work,
            locks,
        }
    }

    pub async fn handle(&self, cmd: BookTicketCommand) -> Result<BookTicketResult, TicketingError> {
        let _customer_guard = self.locks.persons.acquire(cmd.customer_id).await;
        let _ticket_guard = self.locks.tickets.acquire(cmd.ticket_id).await;

        // 1. Load both sides under lock
        let mut person = self
            .persons
            .find_by_id(cmd.customer_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Person, cmd.customer_id))?;
        let mut event = self
            .events
            .find_by_ticket(cmd.ticket_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Ticket, cmd.ticket_id))?;
        let event_id = event.id();

        let customer = person
            .as_customer_mut()
            .ok_or_else(|| TicketingError::not_a_customer(cmd.customer_id))?;
        let ticket = event
            .ticket_mut(cmd.ticket_id)
            .ok_or_else(|| TicketingError::not_found(EntityKind::Ticket, cmd.ticket_id))?;

        // 2. Apply the booking rules
        if let Err(err) = customer.book_ticket(ticket) {
            tracing::warn!(
                customer_id = %cmd.customer_id,
                ticket_id = %cmd.ticket_id,
                "Booking rejected: {}",
                err
            );
            return Err(err.into());
        }
        let ticket = ticket.clone();

        // 3. Commit customer and ticket together
        let batch = WriteBatch::new()
            .put_person(person.clone())
            .put_ticket(event_id, ticket.clone());
        self.unit_of_work.commit(batch).await?;

        tracing::info!(
            customer_id = %cmd.customer_id,
            ticket_id = %cmd.ticket_id,
            event_id = %event_id,
            price = %ticket.price(),
            "Ticket booked"
        );

        Ok(BookTicketResult {
            customer: person,
            event_id,
            ticket,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::person::BookingError;

    fn handler(ctx: &TestContext) -> BookTicketHandler {
        BookTicketHandler::new(
            ctx.persons.clone(),
            ctx.events.clone(),
            ctx.unit_of_work.clone(),
            ctx.locks.clone(),
        )
    }

    #[tokio::test]
    async fn booking_marks_ticket_unavailable_and_records_it() {
        let ctx = TestContext::new();
        let customer = ctx.customer("Jane").await;
        let event = ctx.event(&[50]).await;
        let ticket_id = event.tickets()[0].id();

        let result = handler(&ctx)
            .handle(BookTicketCommand {
                customer_id: customer.id(),
                ticket_id,
            })
            .await
            .unwrap();

        assert!(!result.ticket.is_available());
        assert_eq!(result.event_id, event.id());
        let stored = ctx.reload_person(&customer).await;
        assert_eq!(stored.as_customer().unwrap().booked_tickets(), &[ticket_id]);
        let stored = ctx.reload_event(&event).await;
        assert!(!stored.ticket(ticket_id).unwrap().is_available());
    }

    #[tokio::test]
    async fn ticket_held_by_someone_else_is_rejected() {
        let ctx = TestContext::new();
        let first = ctx.customer("First").await;
        let second = ctx.customer("Second").await;
        let event = ctx.event(&[50]).await;
        let ticket_id = event.tickets()[0].id();
        let handler = handler(&ctx);
        handler
            .handle(BookTicketCommand {
                customer_id: first.id(),
                ticket_id,
            })
            .await
            .unwrap();

        let err = handler
            .handle(BookTicketCommand {
                customer_id: second.id(),
                ticket_id,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TicketingError::Booking(BookingError::TicketUnavailable { ticket_id })
        );
        let second = ctx.reload_person(&second).await;
        assert!(second.as_customer().unwrap().booked_tickets().is_empty());
        let first = ctx.reload_person(&first).await;
        assert!(first.as_customer().unwrap().holds(ticket_id));
    }

    #[tokio::test]
    async fn booking_twice_reports_already_booked() {
        let ctx = TestContext::new();
        let customer = ctx.customer("Jane").await;
        let event = ctx.event(&[50]).await;
        let ticket_id = event.tickets()[0].id();
        let cmd = BookTicketCommand {
            customer_id: customer.id(),
            ticket_id,
        };
        handler(&ctx).handle(cmd.clone()).await.unwrap();

        let err = handler(&ctx).handle(cmd).await.unwrap_err();

        assert_eq!(
            err,
            TicketingError::Booking(BookingError::AlreadyBooked { ticket_id })
        );
    }

    #[tokio::test]
    async fn administrators_cannot_book() {
        let ctx = TestContext::new();
        let admin = ctx.administrator("Admin").await;
        let event = ctx.event(&[50]).await;

        let err = handler(&ctx)
            .handle(BookTicketCommand {
                customer_id: admin.id(),
                ticket_id: event.tickets()[0].id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, TicketingError::not_a_customer(admin.id()));
    }

    #[tokio::test]
    async fn unknown_ticket_is_not_found() {
        let ctx = TestContext::new();
        let customer = ctx.customer("Jane").await;
        let ticket_id = TicketId::new();

        let err = handler(&ctx)
            .handle(BookTicketCommand {
                customer_id: customer.id(),
                ticket_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err, TicketingError::not_found(EntityKind::Ticket, ticket_id));
    }

    #[tokio::test]
    async fn concurrent_bookings_of_one_ticket_have_one_winner() {
        let ctx = TestContext::new();
        let event = ctx.event(&[50]).await;
        let ticket_id = event.tickets()[0].id();
        let handler = Arc::new(handler(&ctx));

        let mut tasks = Vec::new();
        for i in 0..10 {
            let customer = ctx.customer(&format!("Customer{}", i)).await;
            let handler = handler.clone();
            tasks.push(tokio::spawn(async move {
                handler
                    .handle(BookTicketCommand {
                        customer_id: customer.id(),
                        ticket_id,
                    })
                    .await
            }));
        }

        let mut winners = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => winners += 1,
                Err(err) => assert_eq!(
                    err,
                    TicketingError::Booking(BookingError::TicketUnavailable { ticket_id })
                ),
            }
        }

        assert_eq!(winners, 1);
        let holders = ctx
            .persons
            .find_all_where(&|p: &Person| p.as_customer().is_some_and(|c| c.holds(ticket_id)))
            .await
            .unwrap();
        assert_eq!(holders.len(), 1);
    }
}
