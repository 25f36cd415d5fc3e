//! GetEventRevenueHandler - Query handler for an event's revenue.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError};
use crate::domain::foundation::{EventId, Money};
use crate::ports::EventRepository;

/// Query for the revenue of one event.
#[derive(Debug, Clone)]
pub struct GetEventRevenueQuery {
    pub event_id: EventId,
}

/// Revenue summary of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEventRevenueResult {
    pub event_id: EventId,
    /// Sum of prices over unavailable tickets.
    pub revenue: Money,
    pub unavailable_tickets: usize,
    pub total_tickets: usize,
}

/// Handler for event revenue.
pub struct GetEventRevenueHandler {
    events: Arc<dyn EventRepository>,
}

impl GetEventRevenueHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(
        &self,
        query: GetEventRevenueQuery,
    ) -> Result<GetEventRevenueResult, TicketingError> {
        let event = self
            .events
            .find_by_id(query.event_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Event, query.event_id))?;

        Ok(GetEventRevenueResult {
            event_id: event.id(),
            revenue: event.revenue(),
            unavailable_tickets: event.unavailable_count(),
            total_tickets: event.tickets().len(),
        })
    }
}
