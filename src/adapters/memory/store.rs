//! In-memory implementation of every store port.
//!
//! All collections sit behind a single `RwLock`, so a commit or a cascading
//! delete is atomic with respect to every reader. Lookups clone records out
//! of the lock; callers never hold references into the store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::config::BookingConfig;
use crate::domain::category::Category;
use crate::domain::event::{Event, EventError};
use crate::domain::foundation::{
    CategoryId, DomainError, ErrorCode, EventId, PersonId, Predicate, Repository, TicketId,
    VenueId,
};
use crate::domain::integrity::{self, CustomerDeletePolicy};
use crate::domain::person::{Person, PersonRole};
use crate::domain::venue::Venue;
use crate::ports::{
    CategoryRepository, EventRepository, PersonRepository, UnitOfWork, VenueRepository,
    WriteBatch, WriteOp,
};

#[derive(Debug, Clone, Default)]
struct StoreState {
    persons: HashMap<PersonId, Person>,
    venues: HashMap<VenueId, Venue>,
    events: HashMap<EventId, Event>,
    categories: HashMap<CategoryId, Category>,
}

impl StoreState {
    /// Event (other than `except`) that already owns `ticket_id`.
    fn ticket_owner(&self, ticket_id: TicketId, except: Option<EventId>) -> Option<EventId> {
        self.events
            .values()
            .filter(|e| Some(e.id()) != except)
            .find(|e| e.contains_ticket(ticket_id))
            .map(Event::id)
    }

    fn ensure_tickets_unowned(&self, event: &Event) -> Result<(), DomainError> {
        for ticket in event.tickets() {
            if let Some(owner) = self.ticket_owner(ticket.id(), Some(event.id())) {
                return Err(DomainError::new(
                    ErrorCode::DuplicateEntity,
                    format!("Ticket {} already belongs to event {}", ticket.id(), owner),
                ));
            }
        }
        Ok(())
    }

    fn ensure_venue_exists(&self, event: &Event) -> Result<(), DomainError> {
        match event.venue_id() {
            Some(venue_id) if !self.venues.contains_key(&venue_id) => {
                Err(DomainError::not_found(ErrorCode::VenueNotFound, venue_id))
            }
            _ => Ok(()),
        }
    }

    /// A customer may only hold existing tickets that nobody else holds; an
    /// administrator may only manage existing events.
    fn ensure_person_references(&self, person: &Person) -> Result<(), DomainError> {
        match person.role() {
            PersonRole::Customer(customer) => {
                for ticket_id in customer.booked_tickets() {
                    if self.ticket_owner(*ticket_id, None).is_none() {
                        return Err(DomainError::referential_violation(format!(
                            "Customer {} references missing ticket {}",
                            person.id(),
                            ticket_id
                        )));
                    }
                    let held_elsewhere = self.persons.values().any(|p| {
                        p.id() != person.id()
                            && p.as_customer().is_some_and(|c| c.holds(*ticket_id))
                    });
                    if held_elsewhere {
                        return Err(DomainError::new(
                            ErrorCode::TicketUnavailable,
                            format!("Ticket {} is held by another customer", ticket_id),
                        )
                        .with_detail("ticket_id", ticket_id.to_string()));
                    }
                }
            }
            PersonRole::Administrator(admin) => {
                for event_id in admin.managed_events() {
                    if !self.events.contains_key(event_id) {
                        return Err(DomainError::referential_violation(format!(
                            "Administrator {} references missing event {}",
                            person.id(),
                            event_id
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// An available ticket must not sit in anyone's booked set.
    fn ensure_ticket_unheld(&self, ticket_id: TicketId) -> Result<(), DomainError> {
        let holder = self
            .persons
            .values()
            .find(|p| p.as_customer().is_some_and(|c| c.holds(ticket_id)));
        match holder {
            Some(person) => Err(DomainError::referential_violation(format!(
                "Ticket {} is held by customer {} and cannot become available",
                ticket_id,
                person.id()
            ))),
            None => Ok(()),
        }
    }

    fn ensure_category_references(&self, category: &Category) -> Result<(), DomainError> {
        match category.events().iter().find(|id| !self.events.contains_key(*id)) {
            Some(event_id) => Err(DomainError::referential_violation(format!(
                "Category {} references missing event {}",
                category.id(),
                event_id
            ))),
            None => Ok(()),
        }
    }

    fn validate(&self, op: &WriteOp) -> Result<(), DomainError> {
        match op {
            WriteOp::PutPerson(person) => {
                if !self.persons.contains_key(&person.id()) {
                    return Err(DomainError::not_found(ErrorCode::PersonNotFound, person.id()));
                }
                self.ensure_person_references(person)?;
            }
            WriteOp::PutEvent(event) => {
                if !self.events.contains_key(&event.id()) {
                    return Err(DomainError::not_found(ErrorCode::EventNotFound, event.id()));
                }
                self.ensure_venue_exists(event)?;
            }
            WriteOp::PutTicket { event_id, ticket } => {
                let event = self
                    .events
                    .get(event_id)
                    .ok_or_else(|| DomainError::not_found(ErrorCode::EventNotFound, event_id))?;
                if let Some(owner) = self.ticket_owner(ticket.id(), Some(*event_id)) {
                    return Err(DomainError::new(
                        ErrorCode::DuplicateEntity,
                        format!("Ticket {} already belongs to event {}", ticket.id(), owner),
                    ));
                }
                let reopens = ticket.is_available() || !event.contains_ticket(ticket.id());
                if event.is_cancelled() && reopens {
                    return Err(EventError::EventCancelled {
                        event_id: *event_id,
                    }
                    .into());
                }
                if ticket.is_available() {
                    self.ensure_ticket_unheld(ticket.id())?;
                }
            }
            WriteOp::PutCategory(category) => {
                if !self.categories.contains_key(&category.id()) {
                    return Err(DomainError::not_found(
                        ErrorCode::CategoryNotFound,
                        category.id(),
                    ));
                }
                self.ensure_category_references(category)?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, op: WriteOp) -> Result<(), DomainError> {
        match op {
            WriteOp::PutPerson(person) => {
                self.persons.insert(person.id(), person);
            }
            WriteOp::PutEvent(event) => {
                let stored = self
                    .events
                    .get_mut(&event.id())
                    .ok_or_else(|| DomainError::not_found(ErrorCode::EventNotFound, event.id()))?;
                stored.adopt_details(&event);
            }
            WriteOp::PutTicket { event_id, ticket } => {
                let event = self
                    .events
                    .get_mut(&event_id)
                    .ok_or_else(|| DomainError::not_found(ErrorCode::EventNotFound, event_id))?;
                match event.ticket_mut(ticket.id()) {
                    Some(existing) => *existing = ticket,
                    None => event.add_ticket(ticket)?,
                }
            }
            WriteOp::PutCategory(category) => {
                self.categories.insert(category.id(), category);
            }
        }
        Ok(())
    }
}

/// In-memory store backing every repository port and the unit of work.
///
/// Suitable for tests and single-process deployments. Delete-time integrity
/// rules come from [`crate::domain::integrity`].
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryTicketingStore::new());
/// let events: Arc<dyn EventRepository> = store.clone();
/// let persons: Arc<dyn PersonRepository> = store.clone();
/// ```
#[derive(Debug)]
pub struct InMemoryTicketingStore {
    state: RwLock<StoreState>,
    customer_delete_policy: CustomerDeletePolicy,
}

impl InMemoryTicketingStore {
    /// Creates an empty store with the default customer-delete policy.
    pub fn new() -> Self {
        Self::with_policy(CustomerDeletePolicy::default())
    }

    /// Creates an empty store configured from `config`.
    pub fn from_config(config: &BookingConfig) -> Self {
        Self::with_policy(config.customer_delete_policy)
    }

    /// Creates an empty store with an explicit customer-delete policy.
    pub fn with_policy(customer_delete_policy: CustomerDeletePolicy) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            customer_delete_policy,
        }
    }

    pub fn customer_delete_policy(&self) -> CustomerDeletePolicy {
        self.customer_delete_policy
    }

    /// Total number of tickets across all events.
    pub async fn ticket_count(&self) -> usize {
        self.state
            .read()
            .await
            .events
            .values()
            .map(|e| e.tickets().len())
            .sum()
    }
}

impl Default for InMemoryTicketingStore {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Persons
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl Repository<Person, PersonId> for InMemoryTicketingStore {
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, DomainError> {
        Ok(self.state.read().await.persons.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        Ok(self.state.read().await.persons.values().cloned().collect())
    }

    async fn find_all_where(
        &self,
        predicate: Predicate<'_, Person>,
    ) -> Result<Vec<Person>, DomainError> {
        let state = self.state.read().await;
        Ok(state.persons.values().filter(|p| predicate(*p)).cloned().collect())
    }

    async fn add(&self, person: &Person) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.persons.contains_key(&person.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEntity,
                format!("Person {} already exists", person.id()),
            ));
        }
        state.ensure_person_references(person)?;
        state.persons.insert(person.id(), person.clone());
        tracing::debug!(person_id = %person.id(), person_type = %person.person_type(), "Person added");
        Ok(())
    }

    async fn update(&self, person: &Person) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let op = WriteOp::PutPerson(person.clone());
        state.validate(&op)?;
        state.apply(op)
    }

    async fn remove(&self, id: PersonId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let person = state
            .persons
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::PersonNotFound, id))?;

        if let Some(customer) = person.as_customer() {
            let (touched, outcome) = integrity::apply_customer_delete(
                customer,
                state.events.values_mut(),
                self.customer_delete_policy,
            );
            tracing::info!(
                person_id = %id,
                policy = ?self.customer_delete_policy,
                events = touched.len(),
                deleted_tickets = outcome.deleted.len(),
                released_tickets = outcome.released.len(),
                "Customer removed"
            );
        } else {
            tracing::info!(person_id = %id, "Administrator removed");
        }
        Ok(())
    }
}

#[async_trait]
impl PersonRepository for InMemoryTicketingStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError> {
        let state = self.state.read().await;
        Ok(state.persons.values().find(|p| p.email() == email).cloned())
    }

    async fn find_holder_of(&self, ticket_id: TicketId) -> Result<Option<Person>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .persons
            .values()
            .find(|p| p.as_customer().is_some_and(|c| c.holds(ticket_id)))
            .cloned())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Venues
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl Repository<Venue, VenueId> for InMemoryTicketingStore {
    async fn find_by_id(&self, id: VenueId) -> Result<Option<Venue>, DomainError> {
        Ok(self.state.read().await.venues.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Venue>, DomainError> {
        Ok(self.state.read().await.venues.values().cloned().collect())
    }

    async fn find_all_where(
        &self,
        predicate: Predicate<'_, Venue>,
    ) -> Result<Vec<Venue>, DomainError> {
        let state = self.state.read().await;
        Ok(state.venues.values().filter(|v| predicate(*v)).cloned().collect())
    }

    async fn add(&self, venue: &Venue) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.venues.contains_key(&venue.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEntity,
                format!("Venue {} already exists", venue.id()),
            ));
        }
        state.venues.insert(venue.id(), venue.clone());
        Ok(())
    }

    async fn update(&self, venue: &Venue) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.venues.get_mut(&venue.id()) {
            Some(existing) => {
                *existing = venue.clone();
                Ok(())
            }
            None => Err(DomainError::not_found(ErrorCode::VenueNotFound, venue.id())),
        }
    }

    async fn remove(&self, id: VenueId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.venues.contains_key(&id) {
            return Err(DomainError::not_found(ErrorCode::VenueNotFound, id));
        }
        if let Err(err) = integrity::ensure_venue_unreferenced(id, state.events.values()) {
            tracing::warn!(venue_id = %id, "Venue removal rejected: {}", err);
            return Err(err);
        }
        state.venues.remove(&id);
        tracing::info!(venue_id = %id, "Venue removed");
        Ok(())
    }
}

impl VenueRepository for InMemoryTicketingStore {}

// ════════════════════════════════════════════════════════════════════════════
// Events
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl Repository<Event, EventId> for InMemoryTicketingStore {
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, DomainError> {
        Ok(self.state.read().await.events.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.state.read().await.events.values().cloned().collect())
    }

    async fn find_all_where(
        &self,
        predicate: Predicate<'_, Event>,
    ) -> Result<Vec<Event>, DomainError> {
        let state = self.state.read().await;
        Ok(state.events.values().filter(|e| predicate(*e)).cloned().collect())
    }

    async fn add(&self, event: &Event) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.events.contains_key(&event.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEntity,
                format!("Event {} already exists", event.id()),
            ));
        }
        state.ensure_venue_exists(event)?;
        state.ensure_tickets_unowned(event)?;
        state.events.insert(event.id(), event.clone());
        tracing::debug!(event_id = %event.id(), tickets = event.tickets().len(), "Event added");
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let op = WriteOp::PutEvent(event.clone());
        state.validate(&op)?;
        state.apply(op)
    }

    async fn remove(&self, id: EventId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let event = state
            .events
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::EventNotFound, id))?;

        let StoreState {
            persons,
            categories,
            ..
        } = &mut *state;
        let detached = integrity::detach_event(&event, persons.values_mut(), categories.values_mut());

        tracing::info!(
            event_id = %id,
            deleted_tickets = event.tickets().len(),
            detached_persons = detached.persons.len(),
            detached_categories = detached.categories.len(),
            "Event removed"
        );
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryTicketingStore {
    async fn find_by_ticket(&self, ticket_id: TicketId) -> Result<Option<Event>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .events
            .values()
            .find(|e| e.contains_ticket(ticket_id))
            .cloned())
    }

    async fn find_by_venue(&self, venue_id: VenueId) -> Result<Vec<Event>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .events
            .values()
            .filter(|e| e.venue_id() == Some(venue_id))
            .cloned()
            .collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Categories
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl Repository<Category, CategoryId> for InMemoryTicketingStore {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn find_all_where(
        &self,
        predicate: Predicate<'_, Category>,
    ) -> Result<Vec<Category>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .values()
            .filter(|c| predicate(*c))
            .cloned()
            .collect())
    }

    async fn add(&self, category: &Category) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.categories.contains_key(&category.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEntity,
                format!("Category {} already exists", category.id()),
            ));
        }
        state.ensure_category_references(category)?;
        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let op = WriteOp::PutCategory(category.clone());
        state.validate(&op)?;
        state.apply(op)
    }

    async fn remove(&self, id: CategoryId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state
            .categories
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::CategoryNotFound, id))?;
        tracing::info!(category_id = %id, "Category removed");
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTicketingStore {
    async fn find_by_event(&self, event_id: EventId) -> Result<Vec<Category>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .values()
            .filter(|c| c.events().contains(&event_id))
            .cloned()
            .collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Unit of work
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl UnitOfWork for InMemoryTicketingStore {
    async fn commit(&self, batch: WriteBatch) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        // Each op is checked against the batch's earlier ops; the working
        // copy replaces the state only if every op passes.
        let ops = batch.len();
        let mut working = state.clone();
        for op in batch.into_ops() {
            if let Err(err) = working.validate(&op).and_then(|()| working.apply(op)) {
                tracing::warn!(ops, code = %err.code, "Batch rejected: {}", err.message);
                return Err(err);
            }
        }
        *state = working;
        tracing::debug!(ops, "Batch committed");
        Ok(())
    }
}
