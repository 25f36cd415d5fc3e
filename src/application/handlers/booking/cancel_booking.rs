//! CancelBookingHandler - Command handler for cancelling a booking.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError, TicketingLocks};
use crate::domain::event::Ticket;
use crate::domain::foundation::{PersonId, TicketId};
use crate::domain::person::Person;
use crate::ports::{EventRepository, PersonRepository, UnitOfWork, WriteBatch};

/// Command to cancel a customer's booking.
#[derive(Debug, Clone)]
pub struct CancelBookingCommand {
    pub customer_id: PersonId,
    pub ticket_id: TicketId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelBookingResult {
    pub customer: Person,
    /// The ticket, available again unless its event was cancelled.
    pub ticket: Ticket,
}

/// Handler for cancelling bookings.
///
/// The ticket returns to the pool, except on a cancelled event where it stays
/// locked.
pub struct CancelBookingHandler {
    persons: Arc<dyn PersonRepository>,
    events: Arc<dyn EventRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    locks: Arc<TicketingLocks>,
}

impl CancelBookingHandler {
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

    pub async fn handle(
        &self,
        cmd: CancelBookingCommand,
    ) -> Result<CancelBookingResult, TicketingError> {
        let _customer_guard = self.locks.persons.acquire(cmd.customer_id).await;
        let _ticket_guard = self.locks.tickets.acquire(cmd.ticket_id).await;

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
        let event_cancelled = event.is_cancelled();

        let customer = person
            .as_customer_mut()
            .ok_or_else(|| TicketingError::not_a_customer(cmd.customer_id))?;
        let ticket = event
            .ticket_mut(cmd.ticket_id)
            .ok_or_else(|| TicketingError::not_found(EntityKind::Ticket, cmd.ticket_id))?;

        if let Err(err) = customer.cancel_booking(ticket) {
            tracing::warn!(
                customer_id = %cmd.customer_id,
                ticket_id = %cmd.ticket_id,
                "Cancellation rejected: {}",
                err
            );
            return Err(err.into());
        }
        if event_cancelled {
            // The holder gives the ticket up, but it stays off sale.
            ticket.mark_unavailable();
        }
        let ticket = ticket.clone();

        let batch = WriteBatch::new()
            .put_person(person.clone())
            .put_ticket(event_id, ticket.clone());
        self.unit_of_work.commit(batch).await?;

        tracing::info!(
            customer_id = %cmd.customer_id,
            ticket_id = %cmd.ticket_id,
            event_id = %event_id,
            "Booking cancelled"
        );

        Ok(CancelBookingResult {
            customer: person,
            ticket,
        })
    }
}
