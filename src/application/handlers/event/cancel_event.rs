//! CancelEventHandler - Command handler for cancelling an event.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError, TicketingLocks};
use crate::domain::event::{Event, Ticket};
use crate::domain::foundation::{EventId, Money};
use crate::ports::{EventRepository, UnitOfWork, WriteBatch};

/// Command to cancel an event.
#[derive(Debug, Clone)]
pub struct CancelEventCommand {
    pub event_id: EventId,
}

/// Result of cancelling an event.
#[derive(Debug, Clone)]
pub struct CancelEventResult {
    pub event: Event,
    /// Tickets that were still on sale when the event was cancelled.
    pub withdrawn_tickets: usize,
    /// Revenue after cancellation, which counts every ticket.
    pub revenue: Money,
}

/// Handler for cancelling events.
///
/// Every ticket of the event becomes unavailable, booked or not. Existing
/// bookings are left in place.
pub struct CancelEventHandler {
    events: Arc<dyn EventRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    locks: Arc<TicketingLocks>,
}

impl CancelEventHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        locks: Arc<TicketingLocks>,
    ) -> Self {
        Self {
            events,
            unit_of_work,
            locks,
        }
    }

    async fn load(&self, event_id: EventId) -> Result<Event, TicketingError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Event, event_id))
    }

    pub async fn handle(&self, cmd: CancelEventCommand) -> Result<CancelEventResult, TicketingError> {
        // The event lock keeps new tickets out; the ticket locks keep
        // bookings out while the flags flip.
        let _event_guard = self.locks.events.acquire(cmd.event_id).await;
        let ticket_ids: Vec<_> = self
            .load(cmd.event_id)
            .await?
            .tickets()
            .iter()
            .map(Ticket::id)
            .collect();
        let _ticket_guards = self.locks.tickets.acquire_all(ticket_ids).await;

        // Reload: bookings may have landed while we waited.
        let mut event = self.load(cmd.event_id).await?;
        let withdrawn_tickets = event.mark_as_cancelled();

        let batch = event
            .tickets()
            .iter()
            .fold(WriteBatch::new().put_event(event.clone()), |batch, ticket| {
                batch.put_ticket(event.id(), ticket.clone())
            });
        self.unit_of_work.commit(batch).await?;

        let revenue = event.revenue();
        tracing::info!(
            event_id = %cmd.event_id,
            tickets = event.tickets().len(),
            withdrawn_tickets,
            revenue = %revenue,
            "Event cancelled"
        );

        Ok(CancelEventResult {
            event,
            withdrawn_tickets,
            revenue,
        })
    }
}
