//! Referential integrity rules applied when an entity is removed.
//!
//! | Removed | Rule |
//! |---------|------|
//! | Event | cascade: its tickets go with it; holders and groupings are detached |
//! | Venue | restrict: rejected while any event references it |
//! | Customer | [`CustomerDeletePolicy`]: cascade or release booked tickets (never those of a cancelled event) |
//! | Administrator | no dependents |
//! | Category | no cascade to events |
//!
//! The functions here are pure. A store calls them inside its delete path
//! and persists whatever they changed.

use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::event::Event;
use crate::domain::foundation::{CategoryId, DomainError, EventId, PersonId, TicketId, VenueId};
use crate::domain::person::{Customer, Person, PersonType};

/// What happens to a customer's booked tickets when the customer is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerDeletePolicy {
    /// Delete the booked tickets from their events.
    #[default]
    CascadeTickets,
    /// Return the booked tickets to the available pool.
    ReleaseTickets,
}

/// Tickets affected by a customer delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDeleteOutcome {
    pub deleted: Vec<TicketId>,
    pub released: Vec<TicketId>,
}

/// Restrict rule for venues.
///
/// # Errors
///
/// Returns `ReferentialViolation` listing the referencing events.
pub fn ensure_venue_unreferenced<'a>(
    venue_id: VenueId,
    events: impl IntoIterator<Item = &'a Event>,
) -> Result<(), DomainError> {
    let referencing: Vec<String> = events
        .into_iter()
        .filter(|e| e.venue_id() == Some(venue_id))
        .map(|e| e.id().to_string())
        .collect();

    if referencing.is_empty() {
        return Ok(());
    }

    Err(DomainError::referential_violation(format!(
        "Venue {} is referenced by {} event(s)",
        venue_id,
        referencing.len()
    ))
    .with_detail("venue_id", venue_id.to_string())
    .with_detail("event_ids", referencing.join(",")))
}

/// Applies `policy` to the tickets held by `customer`.
///
/// Returns the event ids that were modified alongside the outcome.
pub fn apply_customer_delete<'a>(
    customer: &Customer,
    events: impl IntoIterator<Item = &'a mut Event>,
    policy: CustomerDeletePolicy,
) -> (Vec<EventId>, CustomerDeleteOutcome) {
    let mut touched = Vec::new();
    let mut outcome = CustomerDeleteOutcome::default();

    for event in events {
        let mut changed = false;
        for ticket_id in customer.booked_tickets() {
            match policy {
                CustomerDeletePolicy::CascadeTickets => {
                    if event.remove_ticket(*ticket_id).is_some() {
                        outcome.deleted.push(*ticket_id);
                        changed = true;
                    }
                }
                CustomerDeletePolicy::ReleaseTickets => {
                    // Tickets of a cancelled event stay locked.
                    if event.release_ticket(*ticket_id) {
                        outcome.released.push(*ticket_id);
                        changed = true;
                    }
                }
            }
        }
        if changed {
            touched.push(event.id());
        }
    }

    (touched, outcome)
}

/// Detaches a removed event from everyone that referred to it.
///
/// Customers forget the event's tickets, administrators stop managing it and
/// categories drop it. Returns the ids of the persons and categories changed.
pub fn detach_event<'a, 'b>(
    event: &Event,
    persons: impl IntoIterator<Item = &'a mut Person>,
    categories: impl IntoIterator<Item = &'b mut Category>,
) -> DetachedEvent {
    let mut detached = DetachedEvent::default();
    let ticket_ids: Vec<TicketId> = event.tickets().iter().map(|t| t.id()).collect();

    for person in persons {
        let person_id = person.id();
        let changed = match person.person_type() {
            PersonType::Customer => person.as_customer_mut().is_some_and(|customer| {
                ticket_ids
                    .iter()
                    .fold(false, |acc, id| customer.forget_ticket(*id) || acc)
            }),
            PersonType::Administrator => person
                .as_administrator_mut()
                .is_some_and(|admin| admin.forget_event(event.id())),
        };
        if changed {
            detached.persons.push(person_id);
        }
    }

    for category in categories {
        if category.remove_event(event.id()) {
            detached.categories.push(category.id());
        }
    }

    detached
}

/// Entities changed by [`detach_event`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetachedEvent {
    pub persons: Vec<PersonId>,
    pub categories: Vec<CategoryId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::Ticket;
    use crate::domain::foundation::{ErrorCode, Money, Timestamp};
    use crate::domain::venue::{Address, Venue};

    fn event_with_tickets(prices: &[u64]) -> Event {
        let mut event = Event::new("Concert", Timestamp::now()).unwrap();
        for (i, price) in prices.iter().enumerate() {
            event
                .add_ticket(Ticket::new(Money::from_units(*price), format!("A{}", i)))
                .unwrap();
        }
        event
    }

    #[test]
    fn unreferenced_venue_may_be_removed() {
        let venue = Venue::new("Hall", Address::default(), 100).unwrap();
        let events = vec![event_with_tickets(&[10])];
        assert!(ensure_venue_unreferenced(venue.id(), &events).is_ok());
    }

    #[test]
    fn referenced_venue_is_restricted() {
        let venue = Venue::new("Hall", Address::default(), 100).unwrap();
        let events = vec![event_with_tickets(&[10]).with_venue(venue.id())];

        let err = ensure_venue_unreferenced(venue.id(), &events).unwrap_err();

        assert_eq!(err.code, ErrorCode::ReferentialViolation);
        assert_eq!(err.details.get("event_ids"), Some(&events[0].id().to_string()));
    }

    #[test]
    fn cascade_policy_deletes_booked_tickets() {
        let mut event = event_with_tickets(&[50, 70]);
        let booked_id = event.tickets()[0].id();
        let mut person = Person::new_customer("Jane", "jane@example.com").unwrap();
        let customer = person.as_customer_mut().unwrap();
        customer
            .book_ticket(event.ticket_mut(booked_id).unwrap())
            .unwrap();

        let mut events = vec![event];
        let (touched, outcome) = apply_customer_delete(
            person.as_customer().unwrap(),
            events.iter_mut(),
            CustomerDeletePolicy::CascadeTickets,
        );

        assert_eq!(touched, vec![events[0].id()]);
        assert_eq!(outcome.deleted, vec![booked_id]);
        assert_eq!(events[0].tickets().len(), 1);
    }

    #[test]
    fn release_policy_returns_tickets_to_pool() {
        let mut event = event_with_tickets(&[50]);
        let booked_id = event.tickets()[0].id();
        let mut person = Person::new_customer("Jane", "jane@example.com").unwrap();
        person
            .as_customer_mut()
            .unwrap()
            .book_ticket(event.ticket_mut(booked_id).unwrap())
            .unwrap();

        let mut events = vec![event];
        let (_, outcome) = apply_customer_delete(
            person.as_customer().unwrap(),
            events.iter_mut(),
            CustomerDeletePolicy::ReleaseTickets,
        );

        assert_eq!(outcome.released, vec![booked_id]);
        assert!(events[0].tickets()[0].is_available());
    }

    #[test]
    fn release_policy_keeps_cancelled_event_locked() {
        let mut event = event_with_tickets(&[50]);
        let booked_id = event.tickets()[0].id();
        let mut person = Person::new_customer("Jane", "jane@example.com").unwrap();
        person
            .as_customer_mut()
            .unwrap()
            .book_ticket(event.ticket_mut(booked_id).unwrap())
            .unwrap();
        event.mark_as_cancelled();

        let mut events = vec![event];
        let (touched, outcome) = apply_customer_delete(
            person.as_customer().unwrap(),
            events.iter_mut(),
            CustomerDeletePolicy::ReleaseTickets,
        );

        assert!(touched.is_empty());
        assert!(outcome.released.is_empty());
        assert!(!events[0].tickets()[0].is_available());
    }

    #[test]
    fn detach_event_cleans_up_references() {
        let mut event = event_with_tickets(&[50]);
        let ticket_id = event.tickets()[0].id();
        let mut customer = Person::new_customer("Jane", "jane@example.com").unwrap();
        customer
            .as_customer_mut()
            .unwrap()
            .book_ticket(event.ticket_mut(ticket_id).unwrap())
            .unwrap();
        let mut admin = Person::new_administrator("Admin", "admin@example.com").unwrap();
        admin.as_administrator_mut().unwrap().add_event(&event);
        let mut category = Category::new("Music").unwrap();
        category.add_event(event.id());

        let mut persons = vec![customer, admin];
        let mut categories = vec![category];
        let detached = detach_event(&event, persons.iter_mut(), categories.iter_mut());

        assert_eq!(detached.persons.len(), 2);
        assert_eq!(detached.categories.len(), 1);
        assert!(persons[0].as_customer().unwrap().booked_tickets().is_empty());
        assert!(persons[1].as_administrator().unwrap().managed_events().is_empty());
        assert!(categories[0].events().is_empty());
    }

    #[test]
    fn default_policy_is_cascade() {
        assert_eq!(CustomerDeletePolicy::default(), CustomerDeletePolicy::CascadeTickets);
    }
}
