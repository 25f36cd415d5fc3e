//! Venue handlers.
//!
//! ## Commands
//! - Creating venues
//! - Deleting venues (restricted while referenced)
//!
//! ## Queries
//! - Remaining seats at a venue

mod create_venue;
mod delete_venue;
mod get_venue_availability;

// Commands
pub use create_venue::{CreateVenueCommand, CreateVenueHandler, CreateVenueResult};
pub use delete_venue::{DeleteVenueCommand, DeleteVenueHandler, DeleteVenueResult};

// Queries
pub use get_venue_availability::{
    GetVenueAvailabilityHandler, GetVenueAvailabilityQuery, GetVenueAvailabilityResult,
};
