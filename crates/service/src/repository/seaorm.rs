use std::marker::PhantomData;

use async_trait::async_trait;
use models::EntityId;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, IntoActiveModel,
    Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, Value,
};
use tracing::debug;

use crate::errors::ServiceError;
use crate::repository::Repository;

type EntityOf<A> = <A as ActiveModelTrait>::Entity;
type ModelOf<A> = <EntityOf<A> as EntityTrait>::Model;
type PrimaryKeyOf<A> = <EntityOf<A> as EntityTrait>::PrimaryKey;

/// SeaORM-backed repository for the entity behind active model `A`.
///
/// `create` and `update` take the active model itself: set columns are
/// written, `NotSet` columns are left to the database (on insert) or keep
/// their stored value (on update).
pub struct SeaOrmRepository<A> {
    pub db: DatabaseConnection,
    _model: PhantomData<fn() -> A>,
}

impl<A> SeaOrmRepository<A> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _model: PhantomData } }
}

impl<A> Clone for SeaOrmRepository<A> {
    fn clone(&self) -> Self { Self::new(self.db.clone()) }
}

fn table_name<A: ActiveModelTrait>() -> String { <EntityOf<A> as Default>::default().table_name().to_owned() }

fn db_err(e: DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

#[async_trait]
impl<A> Repository for SeaOrmRepository<A>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + Sync + 'static,
    ModelOf<A>: IntoActiveModel<A> + Send + Sync,
    <PrimaryKeyOf<A> as PrimaryKeyTrait>::ValueType: From<EntityId>,
{
    type Entity = ModelOf<A>;
    type Data = A;

    async fn get(&self, id: EntityId) -> Result<Option<Self::Entity>, ServiceError> {
        <EntityOf<A> as EntityTrait>::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    /// All rows in primary key order.
    async fn get_all(&self) -> Result<Vec<Self::Entity>, ServiceError> {
        let mut select = <EntityOf<A> as EntityTrait>::find();
        for key in <PrimaryKeyOf<A> as Iterable>::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select.all(&self.db).await.map_err(db_err)
    }

    async fn create(&self, data: A) -> Result<Self::Entity, ServiceError> {
        let created = data.insert(&self.db).await.map_err(db_err)?;
        debug!(table = %table_name::<A>(), "row_created");
        Ok(created)
    }

    async fn update(&self, data: A, id: EntityId) -> Result<Self::Entity, ServiceError> {
        let existing = <EntityOf<A> as EntityTrait>::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        if existing.is_none() {
            return Err(ServiceError::not_found(&table_name::<A>()));
        }
        let mut am = data;
        for key in <PrimaryKeyOf<A> as Iterable>::iter() {
            am.set(key.into_column(), Value::from(id));
        }
        let updated = am.update(&self.db).await.map_err(|e| match e {
            // row vanished between the lookup and the write
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ServiceError::not_found(&table_name::<A>()),
            other => db_err(other),
        })?;
        debug!(table = %table_name::<A>(), id, "row_updated");
        Ok(updated)
    }

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        let res = <EntityOf<A> as EntityTrait>::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(&table_name::<A>()));
        }
        debug!(table = %table_name::<A>(), id, "row_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{tenant, upstream};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn tenant_rows_round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<tenant::ActiveModel>::new(db);

        let t = repo.create(tenant::new("acme")).await?;
        assert_eq!(t.id, 1);
        assert_eq!(repo.get(t.id).await?, Some(t.clone()));

        let renamed = repo.update(tenant::new("acme-renamed"), t.id).await?;
        assert_eq!(renamed, tenant::Model { id: t.id, name: "acme-renamed".into() });

        repo.delete(t.id).await?;
        assert!(repo.get(t.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<tenant::ActiveModel>::new(db);
        for name in ["c", "a", "b"] {
            repo.create(tenant::new(name)).await?;
        }
        let ids: Vec<_> = repo.get_all().await?.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_keeps_unset_columns() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<upstream::ActiveModel>::new(db);

        let up = repo.create(upstream::new("billing", "https://billing.example.com")).await?;
        let paused = repo.update(upstream::set_active(false), up.id).await?;
        assert!(!paused.active);
        assert_eq!(paused.name, "billing");
        assert_eq!(paused.base_url, "https://billing.example.com");
        Ok(())
    }

    #[tokio::test]
    async fn missing_rows_report_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<tenant::ActiveModel>::new(db);

        let err = repo.update(tenant::new("ghost"), 404).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains("tenant")), "got {err:?}");
        assert!(repo.get_all().await?.is_empty());

        let err = repo.delete(404).await.unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn constraint_violations_surface_as_db_errors() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<tenant::ActiveModel>::new(db);

        repo.create(tenant::new("dup")).await?;
        let err = repo.create(tenant::new("dup")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)), "got {err:?}");
        Ok(())
    }
}
