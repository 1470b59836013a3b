use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    /// Returns a product's topics ordered by display_order ascending.
    async fn execute(&self, product_id: Uuid) -> Result<Vec<Topic>, GetTopicsError>;
}

#[async_trait]
pub trait GetSubtopicsUseCase: Send + Sync {
    /// Returns the direct children of a topic, in display order.
    async fn execute(&self, parent_id: Uuid) -> Result<Vec<Topic>, GetTopicsError>;
}
