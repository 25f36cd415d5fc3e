//! GetEventDetailsHandler - Query handler for an event with its venue.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError};
use crate::domain::category::Category;
use crate::domain::event::Event;
use crate::domain::foundation::EventId;
use crate::domain::venue::Venue;
use crate::ports::{CategoryRepository, EventRepository, VenueRepository};

/// Query for one event and the records it refers to.
#[derive(Debug, Clone)]
pub struct GetEventDetailsQuery {
    pub event_id: EventId,
}

/// Event details with its venue loaded explicitly.
#[derive(Debug, Clone)]
pub struct GetEventDetailsResult {
    pub event: Event,
    pub venue: Option<Venue>,
    pub categories: Vec<Category>,
    pub available_tickets: usize,
}

/// Handler for event details.
pub struct GetEventDetailsHandler {
    events: Arc<dyn EventRepository>,
    venues: Arc<dyn VenueRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl GetEventDetailsHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        venues: Arc<dyn VenueRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            events,
            venues,
            categories,
        }
    }

    pub async fn handle(
        &self,
        query: GetEventDetailsQuery,
    ) -> Result<GetEventDetailsResult, TicketingError> {
        let event = self
            .events
            .find_by_id(query.event_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Event, query.event_id))?;

        let venue = match event.venue_id() {
            Some(venue_id) => self.venues.find_by_id(venue_id).await?,
            None => None,
        };
        let mut categories = self.categories.find_by_event(event.id()).await?;
        categories.sort_by(|a, b| a.name().cmp(b.name()));

        let available_tickets = event.tickets().len() - event.unavailable_count();

        Ok(GetEventDetailsResult {
            event,
            venue,
            categories,
            available_tickets,
        })
    }
}
