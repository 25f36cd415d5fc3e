//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers take the record locks they need from [`TicketingLocks`]
//! and commit through the unit of work; query handlers only read.

mod error;
pub mod handlers;
mod locks;

pub use error::{EntityKind, TicketingError};
pub use locks::{LockRegistry, RecordGuard, TicketingLocks};

pub use handlers::*;
