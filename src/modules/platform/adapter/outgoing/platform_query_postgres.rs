use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;
use crate::modules::platform::application::ports::outgoing::{PlatformQuery, PlatformQueryError};

// SeaORM entity
use super::sea_orm_entity::{
    Column as PlatformColumn, Entity as PlatformEntity, Model as PlatformModel,
};

#[derive(Debug, Clone)]
pub struct PlatformQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlatformQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlatformQuery for PlatformQueryPostgres {
    async fn get_platforms(&self) -> Result<Vec<Platform>, PlatformQueryError> {
        let models: Vec<PlatformModel> = PlatformEntity::find()
            .order_by_asc(PlatformColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| PlatformQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn find_platform(
        &self,
        platform_id: Uuid,
    ) -> Result<Option<Platform>, PlatformQueryError> {
        let model = PlatformEntity::find_by_id(platform_id)
            .one(&*self.db)
            .await
            .map_err(|e| PlatformQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}
