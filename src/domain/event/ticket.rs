//! Ticket entity and its availability state machine.
//!
//! A ticket carries a single availability flag. The flag is the only
//! authoritative state: who holds a booked ticket is tracked on the
//! customer side, never on the ticket itself.

use crate::domain::foundation::{Money, TicketId};
use serde::{Deserialize, Serialize};

/// A sellable seat at an event.
///
/// # Invariants
///
/// - `id` never changes after construction
/// - `price` is non-negative (enforced by [`Money`])
/// - `available` starts out `true`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    price: Money,
    seat: String,
    available: bool,
}

impl Ticket {
    /// Creates a new, available ticket.
    pub fn new(price: Money, seat: impl Into<String>) -> Self {
        Self {
            id: TicketId::new(),
            price,
            seat: seat.into(),
            available: true,
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Seat label. Uniqueness within an event is not enforced.
    pub fn seat(&self) -> &str {
        &self.seat
    }

    /// Returns true if the ticket may currently be booked.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Sets the availability flag unconditionally.
    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }

    /// Marks the ticket as unavailable. Idempotent.
    pub fn mark_unavailable(&mut self) {
        self.available = false;
    }
}
