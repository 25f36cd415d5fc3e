//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `PersonRepository` - Administrators and customers
//! - `VenueRepository` - Venues (restrict on delete)
//! - `EventRepository` - Events with their tickets (cascade on delete)
//! - `CategoryRepository` - Event groupings
//! - `UnitOfWork` - Atomic multi-entity commits

mod category_repository;
mod event_repository;
mod person_repository;
mod unit_of_work;
mod venue_repository;

pub use category_repository::CategoryRepository;
pub use event_repository::EventRepository;
pub use person_repository::PersonRepository;
pub use unit_of_work::{UnitOfWork, WriteBatch, WriteOp};
pub use venue_repository::VenueRepository;
