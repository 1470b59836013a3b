use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::{
    incoming::use_cases::{GetSubtopicsUseCase, GetTopicsError, GetTopicsUseCase},
    outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<Vec<Topic>, GetTopicsError> {
        self.query
            .get_topics(product_id)
            .await
            .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q> GetSubtopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, parent_id: Uuid) -> Result<Vec<Topic>, GetTopicsError> {
        self.query
            .get_subtopics(parent_id)
            .await
            .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))
    }
}
