//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, grouped
//! by the record they primarily act on.

pub mod booking;
pub mod category;
pub mod event;
pub mod person;
pub mod venue;

#[cfg(test)]
pub(crate) mod test_support;

pub use booking::*;
pub use category::*;
pub use event::*;
pub use person::*;
pub use venue::*;
