//! CreateVenueHandler - Command handler for registering a venue.

use std::sync::Arc;

use crate::application::TicketingError;
use crate::domain::venue::{Address, Venue};
use crate::ports::VenueRepository;

/// Command to create a venue.
#[derive(Debug, Clone)]
pub struct CreateVenueCommand {
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub capacity: u32,
}

/// Result of successful venue creation.
#[derive(Debug, Clone)]
pub struct CreateVenueResult {
    pub venue: Venue,
}

/// Handler for creating venues.
pub struct CreateVenueHandler {
    venues: Arc<dyn VenueRepository>,
}

impl CreateVenueHandler {
    pub fn new(venues: Arc<dyn VenueRepository>) -> Self {
        Self { venues }
    }

    pub async fn handle(&self, cmd: CreateVenueCommand) -> Result<CreateVenueResult, TicketingError> {
        let address = Address::new(cmd.street, cmd.city, cmd.postal_code);
        let venue = Venue::new(cmd.name, address, cmd.capacity)?;

        self.venues.add(&venue).await?;

        tracing::info!(venue_id = %venue.id(), capacity = venue.capacity(), "Venue created");

        Ok(CreateVenueResult { venue })
    }
}
