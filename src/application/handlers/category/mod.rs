//! Category handlers.
//!
//! ## Commands
//! - Creating categories
//! - Assigning events to a category
//! - Deleting categories (events are kept)

mod assign_event_to_category;
mod create_category;
mod delete_category;

pub use assign_event_to_category::{
    AssignEventToCategoryCommand, AssignEventToCategoryHandler, AssignEventToCategoryResult,
};
pub use create_category::{CreateCategoryCommand, CreateCategoryHandler, CreateCategoryResult};
pub use delete_category::{DeleteCategoryCommand, DeleteCategoryHandler, DeleteCategoryResult};
