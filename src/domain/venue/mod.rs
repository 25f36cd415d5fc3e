//! Venue domain module.
//!
//! - `aggregate` - Venue entity and seat arithmetic
//! - `address` - Address owned by a venue

mod address;
mod aggregate;

pub use address::Address;
pub use aggregate::Venue;
