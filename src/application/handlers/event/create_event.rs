//! CreateEventHandler - Command handler for scheduling an event.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError};
use crate::domain::event::{Event, Ticket};
use crate::domain::foundation::{Timestamp, VenueId};
use crate::ports::{EventRepository, VenueRepository};

/// Command to create an event, optionally at a venue and with initial tickets.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub name: String,
    pub date: Timestamp,
    pub venue_id: Option<VenueId>,
    pub tickets: Vec<Ticket>,
}

/// Result of successful event creation.
#[derive(Debug, Clone)]
pub struct CreateEventResult {
    pub event: Event,
}

/// Handler for creating events.
pub struct CreateEventHandler {
    events: Arc<dyn EventRepository>,
    venues: Arc<dyn VenueRepository>,
}

impl CreateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>, venues: Arc<dyn VenueRepository>) -> Self {
        Self { events, venues }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<CreateEventResult, TicketingError> {
        if let Some(venue_id) = cmd.venue_id {
            if !self.venues.exists(venue_id).await? {
                return Err(TicketingError::not_found(EntityKind::Venue, venue_id));
            }
        }

        let mut event = Event::new(cmd.name, cmd.date)?;
        event.set_venue(cmd.venue_id);
        for ticket in cmd.tickets {
            event.add_ticket(ticket)?;
        }

        self.events.add(&event).await?;

        tracing::info!(
            event_id = %event.id(),
            venue_id = ?event.venue_id().map(|id| id.to_string()),
            tickets = event.tickets().len(),
            "Event created"
        );

        Ok(CreateEventResult { event })
    }
}
