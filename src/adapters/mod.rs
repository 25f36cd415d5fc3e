//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory store backing all repository ports

pub mod memory;

pub use memory::InMemoryTicketingStore;
