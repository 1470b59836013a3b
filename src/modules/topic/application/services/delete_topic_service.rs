use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::ports::{
    incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid) -> Result<(), DeleteTopicError> {
        self.repository
            .delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                other => DeleteTopicError::RepositoryError(other.to_string()),
            })
    }
}
