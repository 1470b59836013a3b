use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::version::application::ports::{
    incoming::use_cases::{DeleteVersionError, DeleteVersionUseCase},
    outgoing::{VersionRepository, VersionRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteVersionService<R>
where
    R: VersionRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteVersionService<R>
where
    R: VersionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteVersionUseCase for DeleteVersionService<R>
where
    R: VersionRepository + Send + Sync,
{
    async fn execute(&self, version_id: Uuid) -> Result<(), DeleteVersionError> {
        self.repository
            .delete_version(version_id)
            .await
            .map_err(|e| match e {
                VersionRepositoryError::VersionNotFound => DeleteVersionError::VersionNotFound,
                other => DeleteVersionError::RepositoryError(other.to_string()),
            })
    }
}
