use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete of a topic; subtopics are removed by the storage layer's
/// cascade rules.
#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid) -> Result<(), DeleteTopicError>;
}
