//! AssignManagedEventHandler - Command handler for giving an administrator an event.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError, TicketingLocks};
use crate::domain::foundation::{EventId, PersonId};
use crate::domain::person::{AdministratorError, Person};
use crate::ports::{EventRepository, PersonRepository, UnitOfWork, WriteBatch};

/// Command to add an event to an administrator's managed list.
#[derive(Debug, Clone)]
pub struct AssignManagedEventCommand {
    pub administrator_id: PersonId,
    pub event_id: EventId,
}

/// Result of the assignment.
#[derive(Debug, Clone)]
pub struct AssignManagedEventResult {
    pub administrator: Person,
    /// False when the administrator already managed the event.
    pub newly_assigned: bool,
}

/// Handler for assigning managed events.
///
/// An absent event is rejected with [`AdministratorError::MissingEvent`].
pub struct AssignManagedEventHandler {
    persons: Arc<dyn PersonRepository>,
    events: Arc<dyn EventRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    locks: Arc<TicketingLocks>,
}

impl AssignManagedEventHandler {
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        events: Arc<dyn EventRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        locks: Arc<TicketingLocks>,
    ) -> Self {
        Self {
            persons,
            events,
            unit_of_work,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: AssignManagedEventCommand,
    ) -> Result<AssignManagedEventResult, TicketingError> {
        let _person_guard = self.locks.persons.acquire(cmd.administrator_id).await;

        let mut person = self
            .persons
            .find_by_id(cmd.administrator_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Person, cmd.administrator_id))?;
        let administrator = person
            .as_administrator_mut()
            .ok_or_else(|| TicketingError::not_an_administrator(cmd.administrator_id))?;

        let event = self.events.find_by_id(cmd.event_id).await?.ok_or(
            AdministratorError::MissingEvent {
                administrator_id: cmd.administrator_id,
                event_id: cmd.event_id,
            },
        )?;

        if administrator.manages(event.id()) {
            return Ok(AssignManagedEventResult {
                administrator: person,
                newly_assigned: false,
            });
        }
        administrator.add_event(&event);

        self.unit_of_work
            .commit(WriteBatch::new().put_person(person.clone()))
            .await?;

        tracing::info!(
            administrator_id = %cmd.administrator_id,
            event_id = %cmd.event_id,
            "Managed event assigned"
        );

        Ok(AssignManagedEventResult {
            administrator: person,
            newly_assigned: true,
        })
    }
}
