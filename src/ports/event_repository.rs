//! Event repository port.
//!
//! Events are stored together with the tickets they own, so removing an
//! event removes its tickets.

use async_trait::async_trait;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId, Repository, TicketId, VenueId};

/// Repository port for [`Event`] aggregates.
#[async_trait]
pub trait EventRepository: Repository<Event, EventId> {
    /// Finds the event owning `ticket_id`.
    async fn find_by_ticket(&self, ticket_id: TicketId) -> Result<Option<Event>, DomainError>;

    /// Finds every event held at `venue_id`.
    async fn find_by_venue(&self, venue_id: VenueId) -> Result<Vec<Event>, DomainError>;
}
