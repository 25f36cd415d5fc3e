//! Event domain module.
//!
//! Event lifecycle, ticket ownership and revenue.
//!
//! # Module Structure
//!
//! - `aggregate` - Event aggregate owning its tickets
//! - `ticket` - Ticket entity and availability flag
//! - `errors` - Event-specific errors

mod aggregate;
mod errors;
mod ticket;

pub use aggregate::Event;
pub use errors::EventError;
pub use ticket::Ticket;
