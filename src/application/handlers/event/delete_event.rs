//! DeleteEventHandler - Command handler for deleting an event.

use std::sync::Arc;

use crate::application::{TicketingError, TicketingLocks};
use crate::domain::foundation::EventId;
use crate::ports::EventRepository;

/// Command to delete an event together with its tickets.
#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: EventId,
}

/// Result of deleting an event.
#[derive(Debug, Clone)]
pub struct DeleteEventResult {
    pub event_id: EventId,
}

/// Handler for deleting events.
///
/// The store cascades the delete to the event's tickets and detaches the
/// event from customers, administrators and categories.
pub struct DeleteEventHandler {
    events: Arc<dyn EventRepository>,
    locks: Arc<TicketingLocks>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventRepository>, locks: Arc<TicketingLocks>) -> Self {
        Self { events, locks }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> Result<DeleteEventResult, TicketingError> {
        let _event_guard = self.locks.events.acquire(cmd.event_id).await;

        self.events.remove(cmd.event_id).await?;

        Ok(DeleteEventResult {
            event_id: cmd.event_id,
        })
    }
}
