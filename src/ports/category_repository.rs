//! Category repository port.

use async_trait::async_trait;

use crate::domain::category::Category;
use crate::domain::foundation::{CategoryId, DomainError, EventId, Repository};

/// Repository port for [`Category`] records.
///
/// Removing a category never touches its events.
#[async_trait]
pub trait CategoryRepository: Repository<Category, CategoryId> {
    /// Finds every category an event belongs to.
    async fn find_by_event(&self, event_id: EventId) -> Result<Vec<Category>, DomainError>;
}
