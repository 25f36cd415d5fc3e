//! Person domain module.
//!
//! Administrators and customers, and the customer-side booking engine.
//!
//! # Module Structure
//!
//! - `aggregate` - Person with shared fields and tagged role
//! - `administrator` - Managed events
//! - `customer` - Booked tickets, booking and cancellation
//! - `errors` - Booking and administrator errors

mod administrator;
mod aggregate;
mod customer;
mod errors;

pub use administrator::Administrator;
pub use aggregate::{Person, PersonRole, PersonType};
pub use customer::{ActiveBookings, Customer};
pub use errors::{AdministratorError, BookingError};
