use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Topics of a product in canonical order (display_order ascending).
    async fn get_topics(&self, product_id: Uuid) -> Result<Vec<Topic>, TopicQueryError>;

    /// Direct children of a topic, in display order.
    async fn get_subtopics(&self, parent_id: Uuid) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError>;
}
