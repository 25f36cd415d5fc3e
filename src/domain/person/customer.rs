//! Customer role and the booking engine.
//!
//! The customer's booked set and the ticket's availability flag are the
//! only mutable shared state of a booking. Both are updated together by
//! [`Customer::book_ticket`] and [`Customer::cancel_booking`]; nothing else
//! touches the booked set.

use crate::domain::event::Ticket;
use crate::domain::foundation::TicketId;
use serde::{Deserialize, Serialize};
use std::slice;

use super::BookingError;

/// Customer-specific state: the tickets this customer holds.
///
/// # Invariants
///
/// - `booked_tickets` has no duplicates
/// - every held ticket was made unavailable by this customer's booking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    booked_tickets: Vec<TicketId>,
}

impl Customer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the held tickets, in booking order.
    pub fn booked_tickets(&self) -> &[TicketId] {
        &self.booked_tickets
    }

    pub fn holds(&self, ticket_id: TicketId) -> bool {
        self.booked_tickets.contains(&ticket_id)
    }

    /// Books `ticket` for this customer.
    ///
    /// # Errors
    ///
    /// - `AlreadyBooked` if the customer already holds the ticket
    /// - `TicketUnavailable` if the ticket cannot be booked
    pub fn book_ticket(&mut self, ticket: &mut Ticket) -> Result<(), BookingError> {
        let ticket_id = ticket.id();
        if self.holds(ticket_id) {
            return Err(BookingError::AlreadyBooked { ticket_id });
        }
        if !ticket.is_available() {
            return Err(BookingError::TicketUnavailable { ticket_id });
        }

        self.booked_tickets.push(ticket_id);
        ticket.mark_unavailable();
        Ok(())
    }

    /// Returns a held ticket to the available pool.
    ///
    /// # Errors
    ///
    /// - `NotBooked` if the customer does not hold the ticket
    pub fn cancel_booking(&mut self, ticket: &mut Ticket) -> Result<(), BookingError> {
        let ticket_id = ticket.id();
        if !self.holds(ticket_id) {
            return Err(BookingError::NotBooked { ticket_id });
        }

        ticket.set_availability(true);
        self.booked_tickets.retain(|id| *id != ticket_id);
        Ok(())
    }

    /// Drops a held ticket without touching its flag.
    ///
    /// Used when the ticket itself is deleted by the store.
    pub(crate) fn forget_ticket(&mut self, ticket_id: TicketId) -> bool {
        let before = self.booked_tickets.len();
        self.booked_tickets.retain(|id| *id != ticket_id);
        self.booked_tickets.len() != before
    }

    /// Held tickets that are currently unavailable, looked up in `tickets`.
    ///
    /// Lazy and restartable: clone the iterator to walk it again.
    pub fn active_bookings<'a>(&'a self, tickets: &'a [Ticket]) -> ActiveBookings<'a> {
        ActiveBookings {
            booked: self.booked_tickets.iter(),
            tickets,
        }
    }
}

/// Iterator returned by [`Customer::active_bookings`].
#[derive(Debug, Clone)]
pub struct ActiveBookings<'a> {
    booked: slice::Iter<'a, TicketId>,
    tickets: &'a [Ticket],
}

impl<'a> Iterator for ActiveBookings<'a> {
    type Item = &'a Ticket;

    fn next(&mut self) -> Option<Self::Item> {
        let tickets = self.tickets;
        self.booked.find_map(|id| {
            tickets
                .iter()
                .find(|t| t.id() == *id && !t.is_available())
        })
    }
}
