//! crates/fitness_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases or
//! file storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    CustomPlanSummary, NewStretch, NewWeek, Stretch, StretchUpdate, Week, WeekWithChallenge,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, filesystem).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Unauthorized")]
    Unauthorized,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Record access for the stretches collection.
#[async_trait]
pub trait StretchStore: Send + Sync {
    /// All stretches, newest first. An empty list is a valid outcome.
    async fn list(&self) -> PortResult<Vec<Stretch>>;

    async fn insert(&self, new: NewStretch) -> PortResult<()>;

    /// Applies `update` and returns the post-update record, with the store's
    /// own schema validation re-run. `NotFound` when no record has `id`.
    async fn update(&self, id: Uuid, update: StretchUpdate) -> PortResult<Stretch>;

    /// Flips the active flag and returns the post-update record.
    async fn set_active(&self, id: Uuid, active: bool) -> PortResult<Stretch>;

    /// Removes the record, returning the number of rows removed (0 or 1).
    /// On removal, any associated image blob is cleaned up best-effort:
    /// cleanup failure is logged and never fails the deletion itself.
    async fn delete(&self, id: Uuid) -> PortResult<u64>;
}

/// Record access for the weeks collection.
#[async_trait]
pub trait WeekStore: Send + Sync {
    async fn list(&self) -> PortResult<Vec<Week>>;

    /// Weeks belonging to `challenge_id`, with the parent challenge's display
    /// fields joined in. An unknown parent yields an empty list, not an error.
    async fn list_by_challenge(&self, challenge_id: Uuid) -> PortResult<Vec<WeekWithChallenge>>;

    async fn insert(&self, new: NewWeek) -> PortResult<()>;

    async fn rename(&self, id: Uuid, name: &str) -> PortResult<Week>;

    async fn delete(&self, id: Uuid) -> PortResult<u64>;
}

/// Record access for a user's custom workout plans.
#[async_trait]
pub trait CustomPlanStore: Send + Sync {
    /// The user's plans, newest first, each annotated with its exercise count.
    async fn list_for_user(&self, user_id: Uuid) -> PortResult<Vec<CustomPlanSummary>>;
}

/// External collaborator that verifies a user/session/device credential triple
/// before user-scoped resources may be read. A failed check is a normal
/// negative outcome, not an error.
#[async_trait]
pub trait SessionCheck: Send + Sync {
    async fn verify(
        &self,
        user_id: Uuid,
        session_token: &str,
        device_id: &str,
    ) -> PortResult<bool>;
}

/// External object storage for uploaded images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persists `bytes` and returns the key under which they were stored.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> PortResult<String>;

    /// Removes the blob for `key`. An already-absent blob is success; a key
    /// that resolves outside the storage root is refused.
    async fn remove(&self, key: &str) -> PortResult<()>;

    /// The public URL a client can fetch the blob from.
    fn url(&self, key: &str) -> String;
}
