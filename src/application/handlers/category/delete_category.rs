//! DeleteCategoryHandler - Command handler for deleting a category.

use std::sync::Arc;

use crate::application::{TicketingError, TicketingLocks};
use crate::domain::foundation::CategoryId;
use crate::ports::CategoryRepository;

/// Command to delete a category.
#[derive(Debug, Clone)]
pub struct DeleteCategoryCommand {
    pub category_id: CategoryId,
}

/// Result of deleting a category.
#[derive(Debug, Clone)]
pub struct DeleteCategoryResult {
    pub category_id: CategoryId,
}

/// Handler for deleting categories. Grouped events are not touched.
pub struct DeleteCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
    locks: Arc<TicketingLocks>,
}

impl DeleteCategoryHandler {
    pub fn new(categories: Arc<dyn CategoryRepository>, locks: Arc<TicketingLocks>) -> Self {
        Self { categories, locks }
    }

    pub async fn handle(
        &self,
        cmd: DeleteCategoryCommand,
    ) -> Result<DeleteCategoryResult, TicketingError> {
        let _category_guard = self.locks.categories.acquire(cmd.category_id).await;
        self.categories.remove(cmd.category_id).await?;
        Ok(DeleteCategoryResult {
            category_id: cmd.category_id,
        })
    }
}
