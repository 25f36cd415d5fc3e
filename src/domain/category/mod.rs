//! Event categories.
//!
//! A category groups events. It never owns them: deleting a category
//! leaves its events untouched, and deleting an event only detaches it.

use crate::domain::foundation::{CategoryId, EventId, ValidationError};
use serde::{Deserialize, Serialize};

/// Named grouping of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    events: Vec<EventId>,
}

impl Category {
    /// Creates an empty category.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: CategoryId::new(),
            name,
            events: Vec::new(),
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Events associated with this category.
    pub fn events(&self) -> &[EventId] {
        &self.events
    }

    /// Associates an event. Returns false if it was already associated.
    pub fn add_event(&mut self, event_id: EventId) -> bool {
        if self.events.contains(&event_id) {
            return false;
        }
        self.events.push(event_id);
        true
    }

    /// Drops the association with an event. Returns false if absent.
    pub fn remove_event(&mut self, event_id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|id| *id != event_id);
        self.events.len() != before
    }
}
