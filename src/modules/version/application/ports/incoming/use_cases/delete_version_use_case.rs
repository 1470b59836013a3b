use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteVersionError {
    #[error("Version not found")]
    VersionNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteVersionUseCase: Send + Sync {
    async fn execute(&self, version_id: Uuid) -> Result<(), DeleteVersionError>;
}
