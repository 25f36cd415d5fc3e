//! In-memory store adapter.
//!
//! A single [`InMemoryTicketingStore`] implements every repository port and
//! the unit of work, so cross-collection rules (cascades, restricts, batch
//! commits) run under one lock.

mod store;

pub use store::InMemoryTicketingStore;
