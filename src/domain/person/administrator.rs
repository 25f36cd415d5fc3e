//! Administrator role.

use crate::domain::event::Event;
use crate::domain::foundation::EventId;
use serde::{Deserialize, Serialize};

/// Administrator-specific state: the events this person manages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    managed_events: Vec<EventId>,
}

impl Administrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Managed events in the order they were assigned.
    pub fn managed_events(&self) -> &[EventId] {
        &self.managed_events
    }

    /// Appends an event to the managed list.
    ///
    /// Takes the loaded event, so an absent event cannot be assigned; the
    /// application layer reports a failed lookup as
    /// [`AdministratorError::MissingEvent`](super::AdministratorError).
    pub fn add_event(&mut self, event: &Event) {
        self.managed_events.push(event.id());
    }

    pub fn manages(&self, event_id: EventId) -> bool {
        self.managed_events.contains(&event_id)
    }

    /// Detaches a deleted event.
    pub(crate) fn forget_event(&mut self, event_id: EventId) -> bool {
        let before = self.managed_events.len();
        self.managed_events.retain(|id| *id != event_id);
        self.managed_events.len() != before
    }
}
