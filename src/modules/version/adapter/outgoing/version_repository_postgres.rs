use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::version::application::domain::entities::Version;
use crate::modules::version::application::ports::outgoing::{
    SaveVersionData, VersionRepository, VersionRepositoryError,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as VersionActiveModel, Column, Entity as VersionEntity, Model as VersionModel,
};

#[derive(Debug, Clone)]
pub struct VersionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VersionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // The partial unique index on (product_id) WHERE is_default closes the
    // race between the conflict check and the write; a violation slipping
    // through still maps to the same rejection.
    fn map_err(e: DbErr) -> VersionRepositoryError {
        if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return VersionRepositoryError::DefaultAlreadyExists;
        }

        match e {
            DbErr::RecordNotUpdated => VersionRepositoryError::VersionNotFound,
            other => VersionRepositoryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl VersionRepository for VersionRepositoryPostgres {
    async fn save_version(&self, data: SaveVersionData) -> Result<Version, VersionRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_err)?;

        // A version marked default may not coexist with another default of
        // the same product. The saved row itself is excluded so re-saving
        // an already-default version does not self-conflict.
        if data.is_default {
            let mut conflicts = VersionEntity::find()
                .filter(Column::ProductId.eq(data.product_id))
                .filter(Column::IsDefault.eq(true));

            if let Some(id) = data.id {
                conflicts = conflicts.filter(Column::Id.ne(id));
            }

            if conflicts.one(&txn).await.map_err(Self::map_err)?.is_some() {
                return Err(VersionRepositoryError::DefaultAlreadyExists);
            }
        }

        let saved: VersionModel = match data.id {
            None => {
                let active = VersionActiveModel {
                    id: Set(Uuid::new_v4()),
                    product_id: Set(data.product_id),
                    name: Set(data.name),
                    slug: Set(data.slug),
                    min_version: Set(data.min_version),
                    max_version: Set(data.max_version),
                    visible: Set(data.visible),
                    is_default: Set(data.is_default),
                    ..Default::default()
                };

                active.insert(&txn).await.map_err(Self::map_err)?
            }
            Some(id) => {
                let active = VersionActiveModel {
                    id: Set(id),
                    product_id: Set(data.product_id),
                    name: Set(data.name),
                    slug: Set(data.slug),
                    min_version: Set(data.min_version),
                    max_version: Set(data.max_version),
                    visible: Set(data.visible),
                    is_default: Set(data.is_default),
                    ..Default::default()
                };

                active.update(&txn).await.map_err(Self::map_err)?
            }
        };

        txn.commit().await.map_err(Self::map_err)?;

        Ok(saved.to_domain())
    }

    async fn delete_version(&self, version_id: Uuid) -> Result<(), VersionRepositoryError> {
        let result = VersionEntity::delete_by_id(version_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_err)?;

        if result.rows_affected == 0 {
            return Err(VersionRepositoryError::VersionNotFound);
        }

        Ok(())
    }
}
