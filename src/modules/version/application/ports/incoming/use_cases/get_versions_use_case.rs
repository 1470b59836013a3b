use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::version::application::domain::entities::Version;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetVersionsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetVersionsUseCase: Send + Sync {
    /// Returns a product's versions ordered by max_version descending.
    async fn execute(&self, product_id: Uuid) -> Result<Vec<Version>, GetVersionsError>;
}

#[async_trait]
pub trait GetDefaultVersionUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<Option<Version>, GetVersionsError>;
}
