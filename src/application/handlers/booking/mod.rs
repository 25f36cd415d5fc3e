//! Booking handlers.
//!
//! ## Commands
//! - Booking a ticket for a customer
//! - Cancelling a customer's booking
//!
//! ## Queries
//! - Listing a customer's active bookings

mod book_ticket;
mod cancel_booking;
mod get_active_bookings;

// Commands
pub use book_ticket::{BookTicketCommand, BookTicketHandler, BookTicketResult};
pub use cancel_booking::{CancelBookingCommand, CancelBookingHandler, CancelBookingResult};

// Queries
pub use get_active_bookings::{
    ActiveBooking, GetActiveBookingsHandler, GetActiveBookingsQuery, GetActiveBookingsResult,
};
