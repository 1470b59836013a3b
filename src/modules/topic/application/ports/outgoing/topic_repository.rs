use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;

// Input DTO for creating a topic
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub product_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Stored path of an already-uploaded image, if any.
    pub image: Option<String>,
    pub display_order: i32,
    pub visible: bool,
}

// Partial update; `None` fields are left untouched.
// `parent_id` and `image` distinguish "leave as is" (None) from
// "set to null" (Some(None)).
#[derive(Debug, Clone, Default)]
pub struct UpdateTopicData {
    pub parent_id: Option<Option<Uuid>>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("A topic with this slug already exists for this product")]
    SlugAlreadyExists,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError>;

    /// Hard delete; subtopics cascade at the storage layer.
    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
