//! Event aggregate.
//!
//! An event owns its tickets. Tickets can only enter through
//! [`Event::add_ticket`] and leave when the event (or, under the cascade
//! policy, the holding customer) is deleted.
//!
//! # Design Decisions
//!
//! - **Venue by reference**: the event stores a `VenueId`, never a loaded
//!   venue. Callers that need the venue load it explicitly from the store.
//! - **Cancellation reuses the availability flag**: after
//!   [`Event::mark_as_cancelled`] sold and locked tickets are
//!   indistinguishable, so [`Event::revenue`] reports the full ticket total.
//! - **Cancellation is final**: a cancelled event accepts no new tickets and
//!   never releases a locked one.

use crate::domain::foundation::{EventId, Money, TicketId, Timestamp, ValidationError, VenueId};
use serde::{Deserialize, Serialize};

use super::{EventError, Ticket};

/// Event aggregate - a dated happening with a pool of tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    date: Timestamp,
    venue: Option<VenueId>,
    tickets: Vec<Ticket>,
    #[serde(default)]
    cancelled: bool,
}

impl Event {
    /// Creates a new event without venue or tickets.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if `name` is blank.
    pub fn new(name: impl Into<String>, date: Timestamp) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: EventId::new(),
            name,
            date,
            venue: None,
            tickets: Vec::new(),
            cancelled: false,
        })
    }

    /// Builder-style venue assignment.
    pub fn with_venue(mut self, venue_id: VenueId) -> Self {
        self.venue = Some(venue_id);
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> Timestamp {
        self.date
    }

    /// The referenced venue, if any. Not loaded.
    pub fn venue_id(&self) -> Option<VenueId> {
        self.venue
    }

    pub fn set_venue(&mut self, venue_id: Option<VenueId>) {
        self.venue = venue_id;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Copies name, date, venue and the cancelled marker from `other`.
    ///
    /// Tickets are left alone; they change only one at a time. A cancelled
    /// event stays cancelled.
    pub(crate) fn adopt_details(&mut self, other: &Event) {
        self.name = other.name.clone();
        self.date = other.date;
        self.venue = other.venue;
        self.cancelled |= other.cancelled;
    }

    /// Read-only view of the event's tickets, in insertion order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket(&self, ticket_id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id() == ticket_id)
    }

    /// Mutable access to a single ticket, for booking and cancellation.
    pub fn ticket_mut(&mut self, ticket_id: TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| t.id() == ticket_id)
    }

    pub fn contains_ticket(&self, ticket_id: TicketId) -> bool {
        self.ticket(ticket_id).is_some()
    }

    /// Appends a ticket to the event.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTicket` if a ticket with the same id is already
    /// present. The event keeps exactly one copy. Returns `EventCancelled`
    /// once the event is cancelled.
    pub fn add_ticket(&mut self, ticket: Ticket) -> Result<(), EventError> {
        if self.cancelled {
            return Err(EventError::EventCancelled { event_id: self.id });
        }
        if self.contains_ticket(ticket.id()) {
            return Err(EventError::DuplicateTicket {
                event_id: self.id,
                ticket_id: ticket.id(),
            });
        }
        self.tickets.push(ticket);
        Ok(())
    }

    /// Removes a ticket from the event. Used by the store's cascade rules.
    pub(crate) fn remove_ticket(&mut self, ticket_id: TicketId) -> Option<Ticket> {
        let index = self.tickets.iter().position(|t| t.id() == ticket_id)?;
        Some(self.tickets.remove(index))
    }

    /// Returns a ticket to the available pool.
    ///
    /// Returns false if the ticket is not part of the event or the event is
    /// cancelled; tickets of a cancelled event stay locked.
    pub fn release_ticket(&mut self, ticket_id: TicketId) -> bool {
        if self.cancelled {
            return false;
        }
        match self.ticket_mut(ticket_id) {
            Some(ticket) => {
                ticket.set_availability(true);
                true
            }
            None => false,
        }
    }

    /// Locks every ticket of the event, whatever its current state, and marks
    /// the event cancelled.
    ///
    /// Returns the number of tickets that were still available.
    pub fn mark_as_cancelled(&mut self) -> usize {
        self.cancelled = true;
        let mut locked = 0;
        for ticket in &mut self.tickets {
            if ticket.is_available() {
                locked += 1;
            }
            ticket.set_availability(false);
        }
        locked
    }

    /// Sum of prices over unavailable tickets.
    pub fn revenue(&self) -> Money {
        self.tickets
            .iter()
            .filter(|t| !t.is_available())
            .map(Ticket::price)
            .sum()
    }

    /// Number of tickets that are no longer available.
    pub fn unavailable_count(&self) -> usize {
        self.tickets.iter().filter(|t| !t.is_available()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn concert() -> Event {
        Event::new("Concert", Timestamp::now()).unwrap()
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = Event::new("   ", Timestamp::now());
        assert_eq!(result.unwrap_err(), ValidationError::empty_field("name"));
    }

    #[test]
    fn add_ticket_appends_ticket() {
        let mut event = concert();
        event.add_ticket(Ticket::new(Money::from_units(50), "A1")).unwrap();

        assert_eq!(event.tickets().len(), 1);
    }

    #[test]
    fn adding_same_ticket_twice_keeps_one_copy() {
        let mut event = concert();
        let ticket = Ticket::new(Money::from_units(50), "A1");
        let ticket_id = ticket.id();

        event.add_ticket(ticket.clone()).unwrap();
        let err = event.add_ticket(ticket).unwrap_err();

        assert_eq!(
            err,
            EventError::DuplicateTicket {
                event_id: event.id(),
                ticket_id
            }
        );
        assert_eq!(event.tickets().len(), 1);
    }

    #[test]
    fn revenue_sums_unavailable_tickets() {
        let mut event = concert();
        let mut first = Ticket::new(Money::from_units(50), "A1");
        let mut second = Ticket::new(Money::from_units(70), "A2");
        first.mark_unavailable();
        second.mark_unavailable();
        event.add_ticket(first).unwrap();
        event.add_ticket(second).unwrap();
        event.add_ticket(Ticket::new(Money::from_units(30), "A3")).unwrap();

        assert_eq!(event.revenue(), Money::from_units(120));
    }

    #[test]
    fn revenue_of_event_without_sales_is_zero() {
        let mut event = concert();
        event.add_ticket(Ticket::new(Money::from_units(50), "A1")).unwrap();
        assert_eq!(event.revenue(), Money::ZERO);
    }

    #[test]
    fn cancellation_locks_every_ticket() {
        let mut event = concert();
        let mut sold = Ticket::new(Money::from_units(50), "A1");
        sold.mark_unavailable();
        event.add_ticket(sold).unwrap();
        event.add_ticket(Ticket::new(Money::from_units(70), "A2")).unwrap();

        let locked = event.mark_as_cancelled();

        assert_eq!(locked, 1);
        assert!(event.tickets().iter().all(|t| !t.is_available()));
    }

    #[test]
    fn cancelled_event_rejects_new_tickets() {
        let mut event = concert();
        event.mark_as_cancelled();

        let err = event
            .add_ticket(Ticket::new(Money::from_units(10), "A1"))
            .unwrap_err();

        assert!(event.is_cancelled());
        assert_eq!(err, EventError::EventCancelled { event_id: event.id() });
        assert!(event.tickets().is_empty());
    }

    #[test]
    fn release_ticket_frees_ticket_of_running_event() {
        let mut event = concert();
        let mut ticket = Ticket::new(Money::from_units(10), "A1");
        ticket.mark_unavailable();
        let ticket_id = ticket.id();
        event.add_ticket(ticket).unwrap();

        assert!(event.release_ticket(ticket_id));
        assert!(event.ticket(ticket_id).unwrap().is_available());
    }

    #[test]
    fn cancelled_event_keeps_tickets_locked_on_release() {
        let mut event = concert();
        let ticket = Ticket::new(Money::from_units(10), "A1");
        let ticket_id = ticket.id();
        event.add_ticket(ticket).unwrap();
        event.mark_as_cancelled();

        assert!(!event.release_ticket(ticket_id));
        assert!(!event.ticket(ticket_id).unwrap().is_available());
    }

    #[test]
    fn adopt_details_leaves_tickets_and_cancellation() {
        let mut stored = concert();
        let stale = stored.clone();
        stored.add_ticket(Ticket::new(Money::from_units(10), "A1")).unwrap();
        stored.mark_as_cancelled();
        let mut renamed = stale;
        renamed.name = "Renamed".to_string();

        stored.adopt_details(&renamed);

        assert_eq!(stored.name(), "Renamed");
        assert_eq!(stored.tickets().len(), 1);
        assert!(stored.is_cancelled());
    }

    #[test]
    fn revenue_after_cancellation_is_full_ticket_total() {
        let mut event = concert();
        event.add_ticket(Ticket::new(Money::from_units(120), "A1")).unwrap();

        event.mark_as_cancelled();

        assert_eq!(event.revenue(), Money::from_units(120));
    }

    #[test]
    fn remove_ticket_drops_only_that_ticket() {
        let mut event = concert();
        let keep = Ticket::new(Money::from_units(10), "A1");
        let removed = Ticket::new(Money::from_units(20), "A2");
        let drop_id = removed.id();
        event.add_ticket(keep).unwrap();
        event.add_ticket(removed).unwrap();

        assert!(event.remove_ticket(drop_id).is_some());
        assert!(event.remove_ticket(drop_id).is_none());
        assert_eq!(event.tickets().len(), 1);
    }

    proptest! {
        #[test]
        fn revenue_matches_sum_of_unavailable_prices(
            tickets in prop::collection::vec((0u64..100_000, any::<bool>()), 0..40)
        ) {
            let mut event = concert();
            let mut expected = 0u64;
            for (i, (cents, available)) in tickets.iter().enumerate() {
                let mut ticket = Ticket::new(Money::from_cents(*cents), format!("S{}", i));
                ticket.set_availability(*available);
                if !available {
                    expected += cents;
                }
                event.add_ticket(ticket).unwrap();
            }
            prop_assert_eq!(event.revenue(), Money::from_cents(expected));
        }

        #[test]
        fn revenue_after_cancellation_equals_all_prices(
            prices in prop::collection::vec(0u64..100_000, 0..40)
        ) {
            let mut event = concert();
            for (i, cents) in prices.iter().enumerate() {
                event.add_ticket(Ticket::new(Money::from_cents(*cents), format!("S{}", i))).unwrap();
            }
            event.mark_as_cancelled();
            prop_assert_eq!(event.revenue(), Money::from_cents(prices.iter().sum::<u64>()));
        }
    }
}
