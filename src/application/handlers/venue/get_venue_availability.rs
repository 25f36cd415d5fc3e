//! GetVenueAvailabilityHandler - Query handler for seats left at a venue.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError};
use crate::domain::foundation::VenueId;
use crate::domain::venue::Venue;
use crate::ports::{EventRepository, VenueRepository};

/// Query for the remaining capacity of a venue.
#[derive(Debug, Clone)]
pub struct GetVenueAvailabilityQuery {
    pub venue_id: VenueId,
}

/// Capacity summary of a venue.
#[derive(Debug, Clone)]
pub struct GetVenueAvailabilityResult {
    pub venue: Venue,
    pub events: usize,
    /// Unavailable tickets across every event at the venue.
    pub booked_seats: u32,
    /// Capacity minus booked seats; negative when overbooked.
    pub available_seats: i64,
}

/// Handler for venue availability.
pub struct GetVenueAvailabilityHandler {
    venues: Arc<dyn VenueRepository>,
    events: Arc<dyn EventRepository>,
}

impl GetVenueAvailabilityHandler {
    pub fn new(venues: Arc<dyn VenueRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { venues, events }
    }

    pub async fn handle(
        &self,
        query: GetVenueAvailabilityQuery,
    ) -> Result<GetVenueAvailabilityResult, TicketingError> {
        let venue = self
            .venues
            .find_by_id(query.venue_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Venue, query.venue_id))?;
        let events = self.events.find_by_venue(query.venue_id).await?;

        let booked: usize = events.iter().map(|e| e.unavailable_count()).sum();
        let booked_seats = u32::try_from(booked).unwrap_or(u32::MAX);
        let available_seats = venue.available_seats(booked_seats);

        Ok(GetVenueAvailabilityResult {
            venue,
            events: events.len(),
            booked_seats,
            available_seats,
        })
    }
}
