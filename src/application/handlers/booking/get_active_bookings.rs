//! GetActiveBookingsHandler - Query handler for a customer's active bookings.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::{EntityKind, TicketingError};
use crate::domain::event::{Event, Ticket};
use crate::domain::foundation::{EventId, Money, PersonId};
use crate::ports::{EventRepository, PersonRepository};

/// Query for the tickets a customer currently holds.
#[derive(Debug, Clone)]
pub struct GetActiveBookingsQuery {
    pub customer_id: PersonId,
}

/// One held ticket with the event it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveBooking {
    pub event_id: EventId,
    pub event_name: String,
    pub ticket: Ticket,
}

/// Result of the active bookings query, in booking order.
#[derive(Debug, Clone)]
pub struct GetActiveBookingsResult {
    pub bookings: Vec<ActiveBooking>,
    pub total_price: Money,
}

/// Handler for listing active bookings.
pub struct GetActiveBookingsHandler {
    persons: Arc<dyn PersonRepository>,
    events: Arc<dyn EventRepository>,
}

impl GetActiveBookingsHandler {
    pub fn new(persons: Arc<dyn PersonRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { persons, events }
    }

    pub async fn handle(
        &self,
        query: GetActiveBookingsQuery,
    ) -> Result<GetActiveBookingsResult, TicketingError> {
        let person = self
            .persons
            .find_by_id(query.customer_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Person, query.customer_id))?;
        let customer = person
            .as_customer()
            .ok_or_else(|| TicketingError::not_a_customer(query.customer_id))?;

        // Load each owning event once.
        let mut events: HashMap<EventId, Event> = HashMap::new();
        for ticket_id in customer.booked_tickets() {
            if events.values().any(|e| e.contains_ticket(*ticket_id)) {
                continue;
            }
            if let Some(event) = self.events.find_by_ticket(*ticket_id).await? {
                events.insert(event.id(), event);
            }
        }

        let tickets: Vec<Ticket> = events
            .values()
            .flat_map(|e| e.tickets().iter().cloned())
            .collect();
        let bookings: Vec<ActiveBooking> = customer
            .active_bookings(&tickets)
            .filter_map(|ticket| {
                let event = events.values().find(|e| e.contains_ticket(ticket.id()))?;
                Some(ActiveBooking {
                    event_id: event.id(),
                    event_name: event.name().to_string(),
                    ticket: ticket.clone(),
                })
            })
            .collect();
        let total_price: Money = bookings.iter().map(|b| b.ticket.price()).sum();

        tracing::debug!(
            customer_id = %query.customer_id,
            bookings = bookings.len(),
            "Active bookings loaded"
        );

        Ok(GetActiveBookingsResult {
            bookings,
            total_price,
        })
    }
}
