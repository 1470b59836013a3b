use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

use super::sea_orm_entity::{Column, Entity as TopicEntity};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_topics(&self, product_id: Uuid) -> Result<Vec<Topic>, TopicQueryError> {
        let rows = TopicEntity::find()
            .filter(Column::ProductId.eq(product_id))
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn get_subtopics(&self, parent_id: Uuid) -> Result<Vec<Topic>, TopicQueryError> {
        let rows = TopicEntity::find()
            .filter(Column::ParentId.eq(parent_id))
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        let row = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|m| m.to_domain()))
    }
}
