//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, money, errors, repository contract)
//! - `venue` - Venues and their addresses
//! - `category` - Event groupings
//! - `event` - Event aggregate, tickets, cancellation and revenue
//! - `person` - Administrators, customers and the booking engine
//! - `integrity` - Cascade/restrict rules applied on delete

pub mod category;
pub mod event;
pub mod foundation;
pub mod integrity;
pub mod person;
pub mod venue;
