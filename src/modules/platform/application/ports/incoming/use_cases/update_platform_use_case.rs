use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;

/// Partial update of an existing platform; `None` fields stay as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlatformCommand {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub visible: Option<bool>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePlatformError {
    #[error("Platform not found")]
    PlatformNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePlatformUseCase: Send + Sync {
    async fn execute(
        &self,
        platform_id: Uuid,
        command: UpdatePlatformCommand,
    ) -> Result<Platform, UpdatePlatformError>;
}
