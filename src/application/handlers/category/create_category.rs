//! CreateCategoryHandler - Command handler for creating a category.

use std::sync::Arc;

use crate::application::TicketingError;
use crate::domain::category::Category;
use crate::ports::CategoryRepository;

/// Command to create a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: String,
}

/// Result of successful category creation.
#[derive(Debug, Clone)]
pub struct CreateCategoryResult {
    pub category: Category,
}

/// Handler for creating categories.
pub struct CreateCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn handle(
        &self,
        cmd: CreateCategoryCommand,
    ) -> Result<CreateCategoryResult, TicketingError> {
        let category = Category::new(cmd.name)?;
        self.categories.add(&category).await?;

        tracing::info!(category_id = %category.id(), name = category.name(), "Category created");

        Ok(CreateCategoryResult { category })
    }
}
