use async_trait::async_trait;

use crate::modules::version::application::domain::entities::Version;
use crate::modules::version::application::ports::{
    incoming::use_cases::{SaveVersionCommand, SaveVersionError, SaveVersionUseCase},
    outgoing::{SaveVersionData, VersionRepository, VersionRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SaveVersionService<R>
where
    R: VersionRepository + Send + Sync,
{
    repository: R,
}

impl<R> SaveVersionService<R>
where
    R: VersionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveVersionUseCase for SaveVersionService<R>
where
    R: VersionRepository + Send + Sync,
{
    async fn execute(&self, command: SaveVersionCommand) -> Result<Version, SaveVersionError> {
        let data = SaveVersionData {
            id: command.id(),
            product_id: command.product_id(),
            name: command.name().to_string(),
            slug: command.slug().to_string(),
            min_version: command.min_version(),
            max_version: command.max_version(),
            visible: command.visible(),
            is_default: command.is_default(),
        };

        self.repository
            .save_version(data)
            .await
            .map_err(|e| match e {
                VersionRepositoryError::DefaultAlreadyExists => {
                    SaveVersionError::DefaultAlreadyExists
                }
                VersionRepositoryError::VersionNotFound => SaveVersionError::VersionNotFound,
                other => SaveVersionError::RepositoryError(other.to_string()),
            })
    }
}
