use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlatformQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PlatformQuery: Send + Sync {
    /// All platforms in canonical display order (display_order ascending).
    async fn get_platforms(&self) -> Result<Vec<Platform>, PlatformQueryError>;

    async fn find_platform(
        &self,
        platform_id: Uuid,
    ) -> Result<Option<Platform>, PlatformQueryError>;
}
