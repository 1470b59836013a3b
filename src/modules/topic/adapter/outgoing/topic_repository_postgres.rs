use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, UpdateTopicData,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // The (product_id, slug) unique index surfaces as a unique violation.
    fn map_err(e: DbErr) -> TopicRepositoryError {
        if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return TopicRepositoryError::SlugAlreadyExists;
        }

        match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
            other => TopicRepositoryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(data.product_id),
            parent_id: Set(data.parent_id),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            image: Set(data.image),
            display_order: Set(data.display_order),
            visible: Set(data.visible),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(Self::map_err)?;

        Ok(inserted.to_domain())
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        let mut active = TopicActiveModel {
            id: Set(topic_id),
            ..Default::default()
        };

        if let Some(parent_id) = data.parent_id {
            active.parent_id = Set(parent_id);
        }
        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(slug) = data.slug {
            active.slug = Set(slug);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(image) = data.image {
            active.image = Set(image);
        }
        if let Some(display_order) = data.display_order {
            active.display_order = Set(display_order);
        }
        if let Some(visible) = data.visible {
            active.visible = Set(visible);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_err)?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
