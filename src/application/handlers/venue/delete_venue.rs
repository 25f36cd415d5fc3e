//! DeleteVenueHandler - Command handler for deleting a venue.

use std::sync::Arc;

use crate::application::TicketingError;
use crate::domain::foundation::VenueId;
use crate::ports::VenueRepository;

/// Command to delete a venue.
#[derive(Debug, Clone)]
pub struct DeleteVenueCommand {
    pub venue_id: VenueId,
}

/// Result of deleting a venue.
#[derive(Debug, Clone)]
pub struct DeleteVenueResult {
    pub venue_id: VenueId,
}

/// Handler for deleting venues.
///
/// Fails with `ReferentialViolation` while any event is held at the venue.
pub struct DeleteVenueHandler {
    venues: Arc<dyn VenueRepository>,
}

impl DeleteVenueHandler {
    pub fn new(venues: Arc<dyn VenueRepository>) -> Self {
        Self { venues }
    }

    pub async fn handle(&self, cmd: DeleteVenueCommand) -> Result<DeleteVenueResult, TicketingError> {
        self.venues.remove(cmd.venue_id).await?;
        Ok(DeleteVenueResult {
            venue_id: cmd.venue_id,
        })
    }
}
