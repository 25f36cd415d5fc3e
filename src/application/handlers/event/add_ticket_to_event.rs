//! AddTicketToEventHandler - Command handler for adding a ticket to an event.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError, TicketingLocks};
use crate::domain::event::Ticket;
use crate::domain::foundation::EventId;
use crate::ports::{EventRepository, UnitOfWork, WriteBatch};

/// Command to add a ticket to an event.
#[derive(Debug, Clone)]
pub struct AddTicketToEventCommand {
    pub event_id: EventId,
    pub ticket: Ticket,
}

/// Result of adding a ticket.
#[derive(Debug, Clone)]
pub struct AddTicketToEventResult {
    pub event_id: EventId,
    pub ticket: Ticket,
    /// Number of tickets the event owns afterwards.
    pub ticket_count: usize,
}

/// Handler for adding tickets to events.
///
/// Re-adding a ticket the event already owns fails with `DuplicateTicket`
/// and leaves the event unchanged.
pub struct AddTicketToEventHandler {
    events: Arc<dyn EventRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    locks: Arc<TicketingLocks>,
}

impl AddTicketToEventHandler {
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

    pub async fn handle(
        &self,
        cmd: AddTicketToEventCommand,
    ) -> Result<AddTicketToEventResult, TicketingError> {
        let _event_guard = self.locks.events.acquire(cmd.event_id).await;

        let mut event = self
            .events
            .find_by_id(cmd.event_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Event, cmd.event_id))?;

        if let Err(err) = event.add_ticket(cmd.ticket.clone()) {
            tracing::warn!(event_id = %cmd.event_id, ticket_id = %cmd.ticket.id(), "{}", err);
            return Err(err.into());
        }

        self.unit_of_work
            .commit(WriteBatch::new().put_ticket(cmd.event_id, cmd.ticket.clone()))
            .await?;

        tracing::info!(
            event_id = %cmd.event_id,
            ticket_id = %cmd.ticket.id(),
            seat = cmd.ticket.seat(),
            "Ticket added"
        );

        Ok(AddTicketToEventResult {
            event_id: cmd.event_id,
            ticket: cmd.ticket,
            ticket_count: event.tickets().len(),
        })
    }
}
