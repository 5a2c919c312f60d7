use std::marker::PhantomData;
use std::sync::Arc;

use models::schema::{TenantSchema, UpstreamSchema};
use models::{tenant, upstream, EntityId, Schema};
use sea_orm::DatabaseConnection;
use tracing::instrument;

use crate::errors::ServiceError;
use crate::repository::{seaorm::SeaOrmRepository, Repository};

/// Uniform CRUD over one entity kind.
///
/// Every call goes to the repository once and projects what comes back
/// through schema `S`. Repository errors pass through as-is: a missing id is
/// `Ok(None)` from `get` but whatever the repository raises from `update`
/// and `delete`.
pub struct CrudService<R, S> {
    repository: Arc<R>,
    _schema: PhantomData<fn() -> S>,
}

pub type TenantService = CrudService<SeaOrmRepository<tenant::ActiveModel>, TenantSchema>;
pub type UpstreamService = CrudService<SeaOrmRepository<upstream::ActiveModel>, UpstreamSchema>;

impl<R, S> Clone for CrudService<R, S> {
    fn clone(&self) -> Self { Self { repository: Arc::clone(&self.repository), _schema: PhantomData } }
}

impl<R, S> CrudService<R, S> {
    pub fn new(repository: Arc<R>) -> Self { Self { repository, _schema: PhantomData } }

    pub fn repository(&self) -> &Arc<R> { &self.repository }
}

impl<A, S> CrudService<SeaOrmRepository<A>, S> {
    /// Bind a SeaORM repository for `A` on `db`.
    pub fn with_connection(db: DatabaseConnection) -> Self { Self::new(Arc::new(SeaOrmRepository::new(db))) }
}

impl<R, S> CrudService<R, S>
where
    R: Repository,
    S: Schema<R::Entity>,
{
    #[instrument(skip(self))]
    pub async fn get(&self, id: EntityId) -> Result<Option<S>, ServiceError> {
        match self.repository.get(id).await? {
            Some(entity) => Ok(Some(S::model_validate(entity)?)),
            None => Ok(None),
        }
    }

    /// One schema per entity, in the repository's order.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<S>, ServiceError> {
        let entities = self.repository.get_all().await?;
        Ok(S::model_validate_all(entities)?)
    }

    #[instrument(skip(self, data))]
    pub async fn create(&self, data: R::Data) -> Result<S, ServiceError> {
        let entity = self.repository.create(data).await?;
        Ok(S::model_validate(entity)?)
    }

    #[instrument(skip(self, data))]
    pub async fn update(&self, data: R::Data, id: EntityId) -> Result<S, ServiceError> {
        let entity = self.repository.update(data, id).await?;
        Ok(S::model_validate(entity)?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryRepository;
    use models::Identified;

    type MemTenants = CrudService<MemoryRepository<tenant::Model>, TenantSchema>;

    fn service() -> MemTenants {
        common::logging::init_logging_test();
        CrudService::new(Arc::new(MemoryRepository::new("tenant")))
    }

    fn tenant(name: &str) -> tenant::Model { tenant::Model { id: 0, name: name.into() } }

    #[tokio::test]
    async fn create_get_delete_scenario() {
        let svc = service();

        let created = svc.create(tenant("a")).await.unwrap();
        assert_eq!(created, TenantSchema { id: 1, name: "a".into() });

        assert_eq!(svc.get(1).await.unwrap(), Some(created));

        svc.delete(1).await.unwrap();
        assert_eq!(svc.get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_unknown_id_is_absence_not_error() {
        let svc = service();
        svc.create(tenant("a")).await.unwrap();
        for id in [0, 2, 404, -1, EntityId::MAX] {
            assert!(svc.get(id).await.unwrap().is_none(), "id {id}");
        }
    }

    #[tokio::test]
    async fn get_all_matches_repository_cardinality() {
        let svc = service();
        assert!(svc.get_all().await.unwrap().is_empty());

        for name in ["a", "b", "c"] {
            svc.create(tenant(name)).await.unwrap();
        }
        svc.delete(2).await.unwrap();

        let all = svc.get_all().await.unwrap();
        assert_eq!(all.len(), svc.repository().len().await);
        assert_eq!(all.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_identity() {
        let svc = service();
        let created = svc.create(tenant("a")).await.unwrap();

        let updated = svc.update(tenant("b"), created.id).await.unwrap();
        assert_eq!(updated, TenantSchema { id: created.id, name: "b".into() });
        assert_eq!(svc.get(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_missing_id_propagates_not_found() {
        let svc = service();
        let err = svc.update(tenant("ghost"), 9).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "tenant not found"), "got {err:?}");
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_id_propagates_not_found() {
        let svc = service();
        assert!(svc.delete(1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn invalid_entity_surfaces_validation_error() {
        let svc = service();
        // repository accepts it; the schema refuses to project it
        let err = svc.create(tenant("")).await.unwrap_err();
        assert!(err.is_validation(), "got {err:?}");

        assert!(svc.get(1).await.unwrap_err().is_validation());
        assert!(svc.get_all().await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn identity_survives_schema_round_trip() {
        let svc = service();
        let created = svc.create(tenant("a")).await.unwrap();
        let id = created.id();
        let entity: tenant::Model = created.into();
        assert_eq!(entity.id, id);
    }

    #[tokio::test]
    async fn clones_share_the_repository() {
        let svc = service();
        let other = svc.clone();
        svc.create(tenant("a")).await.unwrap();
        assert_eq!(other.get_all().await.unwrap().len(), 1);
    }
}
