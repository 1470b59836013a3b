use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePlatformError {
    #[error("Platform not found")]
    PlatformNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePlatformUseCase: Send + Sync {
    async fn execute(&self, platform_id: Uuid) -> Result<(), DeletePlatformError>;
}
