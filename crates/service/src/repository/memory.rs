use std::collections::BTreeMap;

use async_trait::async_trait;
use models::{tenant, upstream, EntityId};
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::repository::Repository;

/// Entity that can live in a [`MemoryRepository`].
pub trait MemoryEntity: Clone + Send + Sync + 'static {
    fn id(&self) -> EntityId;
    /// Same record carrying identity `id`.
    fn with_id(self, id: EntityId) -> Self;
}

impl MemoryEntity for tenant::Model {
    fn id(&self) -> EntityId { self.id }
    fn with_id(self, id: EntityId) -> Self { Self { id, ..self } }
}

impl MemoryEntity for upstream::Model {
    fn id(&self) -> EntityId { self.id }
    fn with_id(self, id: EntityId) -> Self { Self { id, ..self } }
}

struct Rows<E> {
    next_id: EntityId,
    rows: BTreeMap<EntityId, E>,
}

/// Process-local repository keeping rows in id order.
///
/// Identities are assigned sequentially from 1 and never reused. The id on a
/// `create` payload is ignored; on `update` it is replaced by the target id.
pub struct MemoryRepository<E> {
    entity: &'static str,
    inner: RwLock<Rows<E>>,
}

impl<E: MemoryEntity> MemoryRepository<E> {
    /// `entity` names the kind in not-found errors.
    pub fn new(entity: &'static str) -> Self {
        Self { entity, inner: RwLock::new(Rows { next_id: 1, rows: BTreeMap::new() }) }
    }

    pub async fn len(&self) -> usize { self.inner.read().await.rows.len() }

    pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

#[async_trait]
impl<E: MemoryEntity> Repository for MemoryRepository<E> {
    type Entity = E;
    type Data = E;

    async fn get(&self, id: EntityId) -> Result<Option<E>, ServiceError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn create(&self, data: E) -> Result<E, ServiceError> {
        let mut guard = self.inner.write().await;
        let id = guard.next_id;
        guard.next_id += 1;
        let row = data.with_id(id);
        guard.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, data: E, id: EntityId) -> Result<E, ServiceError> {
        let mut guard = self.inner.write().await;
        match guard.rows.get_mut(&id) {
            Some(slot) => {
                *slot = data.with_id(id);
                Ok(slot.clone())
            }
            None => Err(ServiceError::not_found(self.entity)),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        let mut guard = self.inner.write().await;
        guard.rows.remove(&id).map(|_| ()).ok_or_else(|| ServiceError::not_found(self.entity))
    }
}
