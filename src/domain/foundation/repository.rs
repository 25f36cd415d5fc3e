//! Base repository trait for persistence operations.
//!
//! This module provides the generic `Repository<T, ID>` trait that defines
//! the standard collection interface for every entity store in the
//! ticketing domain. Entity-specific repositories (see `crate::ports`)
//! extend it with their own queries.
//!
//! # Example
//!
//! ```ignore
//! #[async_trait]
//! pub trait EventRepository: Repository<Event, EventId> {
//!     async fn find_by_venue(&self, venue_id: VenueId) -> Result<Vec<Event>, DomainError>;
//! }
//!
//! pub struct DeleteEventHandler {
//!     events: Arc<dyn EventRepository>,
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// Predicate used by [`Repository::find_all_where`].
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Base trait for entity repositories.
///
/// # Type Parameters
///
/// - `T`: The entity type being persisted
/// - `ID`: The identifier type for the entity (e.g., `EventId`, `VenueId`)
///
/// # Error Handling
///
/// All methods return `Result<_, DomainError>`. Implementations convert
/// their own failures into `DomainError` variants. Business rules are never
/// evaluated here, with the exception of the delete-time integrity rules
/// applied by `remove`.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Finds an entity by its unique identifier.
    ///
    /// Returns `Ok(None)` if the entity doesn't exist.
    /// Returns `Err` only for infrastructure failures.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Returns every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    /// Returns every stored entity matching `predicate`.
    async fn find_all_where(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, DomainError>;

    /// Persists a new entity.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if an entity with the same id already exists
    async fn add(&self, entity: &T) -> Result<(), DomainError>;

    /// Replaces an existing entity.
    ///
    /// # Errors
    ///
    /// - `*NotFound` if the entity doesn't exist
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Deletes an entity, applying the store's cascade/restrict rules.
    ///
    /// # Errors
    ///
    /// - `*NotFound` if the entity doesn't exist
    /// - `ReferentialViolation` if a restrict rule blocks the delete
    async fn remove(&self, id: ID) -> Result<(), DomainError>;

    /// Checks if an entity with the given ID exists.
    ///
    /// Default implementation uses `find_by_id`.
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
