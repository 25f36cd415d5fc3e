//! Event handlers.
//!
//! ## Commands
//! - Creating events, optionally at a venue
//! - Adding tickets to an event
//! - Cancelling an event
//! - Deleting an event (cascades to its tickets)
//!
//! ## Queries
//! - Event revenue
//! - Event details with venue and categories

mod add_ticket_to_event;
mod cancel_event;
mod create_event;
mod delete_event;
mod get_event_details;
mod get_event_revenue;

// Commands
pub use add_ticket_to_event::{
    AddTicketToEventCommand, AddTicketToEventHandler, AddTicketToEventResult,
};
pub use cancel_event::{CancelEventCommand, CancelEventHandler, CancelEventResult};
pub use create_event::{CreateEventCommand, CreateEventHandler, CreateEventResult};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler, DeleteEventResult};

// Queries
pub use get_event_details::{GetEventDetailsHandler, GetEventDetailsQuery, GetEventDetailsResult};
pub use get_event_revenue::{GetEventRevenueHandler, GetEventRevenueQuery, GetEventRevenueResult};
