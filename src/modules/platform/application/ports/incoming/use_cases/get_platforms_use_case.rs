use async_trait::async_trait;

use crate::modules::platform::application::domain::entities::Platform;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPlatformsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPlatformsUseCase: Send + Sync {
    /// Returns all platforms ordered by display_order ascending.
    async fn execute(&self) -> Result<Vec<Platform>, GetPlatformsError>;
}
