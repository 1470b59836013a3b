use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;
use crate::modules::platform::application::ports::outgoing::{
    CreatePlatformData, PlatformRepository, PlatformRepositoryError, UpdatePlatformData,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as PlatformActiveModel, Entity as PlatformEntity, Model as PlatformModel,
};

#[derive(Debug, Clone)]
pub struct PlatformRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlatformRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_err(e: DbErr) -> PlatformRepositoryError {
        match e {
            DbErr::RecordNotUpdated => PlatformRepositoryError::PlatformNotFound,
            other => PlatformRepositoryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl PlatformRepository for PlatformRepositoryPostgres {
    async fn create_platform(
        &self,
        data: CreatePlatformData,
    ) -> Result<Platform, PlatformRepositoryError> {
        let active = PlatformActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            visible: Set(data.visible),
            display_order: Set(data.display_order),
            ..Default::default()
        };

        let inserted: PlatformModel = active.insert(&*self.db).await.map_err(Self::map_err)?;

        Ok(inserted.to_domain())
    }

    async fn update_platform(
        &self,
        platform_id: Uuid,
        data: UpdatePlatformData,
    ) -> Result<Platform, PlatformRepositoryError> {
        let mut active = PlatformActiveModel {
            id: Set(platform_id),
            ..Default::default()
        };

        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(slug) = data.slug {
            active.slug = Set(slug);
        }
        if let Some(visible) = data.visible {
            active.visible = Set(visible);
        }
        if let Some(display_order) = data.display_order {
            active.display_order = Set(display_order);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_platform(&self, platform_id: Uuid) -> Result<(), PlatformRepositoryError> {
        let result = PlatformEntity::delete_by_id(platform_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_err)?;

        if result.rows_affected == 0 {
            return Err(PlatformRepositoryError::PlatformNotFound);
        }

        Ok(())
    }
}
