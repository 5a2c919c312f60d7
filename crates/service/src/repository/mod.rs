use async_trait::async_trait;
use models::EntityId;

use crate::errors::ServiceError;

pub mod memory;
pub mod seaorm;

/// Data access for one entity kind.
///
/// Implementations decide ordering, identity assignment and the error raised
/// for a missing row; callers pass those errors through untouched.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Persisted record handed out by the repository.
    type Entity: Send;
    /// Entity-shaped payload accepted by `create` and `update`.
    type Data: Send;

    /// `Ok(None)` when no row has this id.
    async fn get(&self, id: EntityId) -> Result<Option<Self::Entity>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<Self::Entity>, ServiceError>;
    /// Persist a new row; the repository assigns its identity.
    async fn create(&self, data: Self::Data) -> Result<Self::Entity, ServiceError>;
    /// Apply `data` to the row `id`; `ServiceError::NotFound` when absent.
    async fn update(&self, data: Self::Data, id: EntityId) -> Result<Self::Entity, ServiceError>;
    /// Remove the row `id`; `ServiceError::NotFound` when absent.
    async fn delete(&self, id: EntityId) -> Result<(), ServiceError>;
}
