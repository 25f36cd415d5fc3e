//! AssignEventToCategoryHandler - Command handler for grouping an event.

use std::sync::Arc;

use crate::application::{EntityKind, TicketingError, TicketingLocks};
use crate::domain::category::Category;
use crate::domain::foundation::{CategoryId, EventId};
use crate::ports::{CategoryRepository, EventRepository, UnitOfWork, WriteBatch};

/// Command to associate an event with a category.
#[derive(Debug, Clone)]
pub struct AssignEventToCategoryCommand {
    pub category_id: CategoryId,
    pub event_id: EventId,
}

/// Result of the association.
#[derive(Debug, Clone)]
pub struct AssignEventToCategoryResult {
    pub category: Category,
    /// False when the event was already in the category.
    pub newly_assigned: bool,
}

/// Handler for adding events to categories.
pub struct AssignEventToCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
    events: Arc<dyn EventRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    locks: Arc<TicketingLocks>,
}

impl AssignEventToCategoryHandler {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        events: Arc<dyn EventRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        locks: Arc<TicketingLocks>,
    ) -> Self {
        Self {
            categories,
            events,
            unit_of_work,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: AssignEventToCategoryCommand,
    ) -> Result<AssignEventToCategoryResult, TicketingError> {
        let _category_guard = self.locks.categories.acquire(cmd.category_id).await;

        let mut category = self
            .categories
            .find_by_id(cmd.category_id)
            .await?
            .ok_or_else(|| TicketingError::not_found(EntityKind::Category, cmd.category_id))?;
        if !self.events.exists(cmd.event_id).await? {
            return Err(TicketingError::not_found(EntityKind::Event, cmd.event_id));
        }

        let newly_assigned = category.add_event(cmd.event_id);
        if newly_assigned {
            self.unit_of_work
                .commit(WriteBatch::new().put_category(category.clone()))
                .await?;
            tracing::info!(
                category_id = %cmd.category_id,
                event_id = %cmd.event_id,
                "Event added to category"
            );
        }

        Ok(AssignEventToCategoryResult {
            category,
            newly_assigned,
        })
    }
}
