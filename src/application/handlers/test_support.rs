//! Shared fixture for handler tests: one in-memory store behind every port.

use std::sync::Arc;

use crate::adapters::InMemoryTicketingStore;
use crate::application::TicketingLocks;
use crate::domain::event::{Event, Ticket};
use crate::domain::foundation::{Money, Timestamp, VenueId};
use crate::domain::integrity::CustomerDeletePolicy;
use crate::domain::person::Person;
use crate::domain::venue::{Address, Venue};
use crate::ports::{
    CategoryRepository, EventRepository, PersonRepository, UnitOfWork, VenueRepository,
};

pub(crate) struct TestContext {
    pub store: Arc<InMemoryTicketingStore>,
    pub persons: Arc<dyn PersonRepository>,
    pub venues: Arc<dyn VenueRepository>,
    pub events: Arc<dyn EventRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub unit_of_work: Arc<dyn UnitOfWork>,
    pub locks: Arc<TicketingLocks>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_policy(CustomerDeletePolicy::default())
    }

    pub fn with_policy(policy: CustomerDeletePolicy) -> Self {
        let store = Arc::new(InMemoryTicketingStore::with_policy(policy));
        Self {
            persons: store.clone(),
            venues: store.clone(),
            events: store.clone(),
            categories: store.clone(),
            unit_of_work: store.clone(),
            store,
            locks: Arc::new(TicketingLocks::new()),
        }
    }

    pub async fn customer(&self, name: &str) -> Person {
        let email = format!("{}@example.com", name.to_lowercase());
        let person = Person::new_customer(name, email).unwrap();
        self.persons.add(&person).await.unwrap();
        person
    }

    pub async fn administrator(&self, name: &str) -> Person {
        let email = format!("{}@example.com", name.to_lowercase());
        let person = Person::new_administrator(name, email).unwrap();
        self.persons.add(&person).await.unwrap();
        person
    }

    pub async fn venue(&self, capacity: u32) -> Venue {
        let venue = Venue::new(
            "Concert Hall",
            Address::new("Ringstrasse 1", "Vienna", "1010"),
            capacity,
        )
        .unwrap();
        self.venues.add(&venue).await.unwrap();
        venue
    }

    /// Stores an event with one ticket per price (whole units).
    pub async fn event(&self, prices: &[u64]) -> Event {
        self.event_at(None, prices).await
    }

    pub async fn event_at(&self, venue_id: Option<VenueId>, prices: &[u64]) -> Event {
        let mut event = Event::new("Concert", Timestamp::now().add_days(30)).unwrap();
        event.set_venue(venue_id);
        for (i, price) in prices.iter().enumerate() {
            event
                .add_ticket(Ticket::new(Money::from_units(*price), format!("A{}", i + 1)))
                .unwrap();
        }
        self.events.add(&event).await.unwrap();
        event
    }

    pub async fn reload_person(&self, person: &Person) -> Person {
        self.persons.find_by_id(person.id()).await.unwrap().unwrap()
    }

    pub async fn reload_event(&self, event: &Event) -> Event {
        self.events.find_by_id(event.id()).await.unwrap().unwrap()
    }
}
